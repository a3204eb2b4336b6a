use photo_pdf::Session;
use tokio::sync::mpsc;

use crate::handlers::{self, Reporter};
use crate::{PhotoCommand, PhotoUpdate, SessionLog};

/// Async worker task that processes photo commands and sends updates.
///
/// Commands run strictly one at a time, so add/remove/clear requests sent
/// while a document is being generated wait until the run has finished.
/// Each outcome is also recorded in `status`.
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<PhotoCommand>,
    update_tx: mpsc::UnboundedSender<PhotoUpdate>,
    status: SessionLog,
) {
    let mut session = Session::default();
    let reporter = Reporter {
        update_tx: &update_tx,
        status: &status,
    };

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut session, &reporter).await;
    }

    log::debug!("Command channel closed, photo worker exiting");
}

async fn process_command(cmd: PhotoCommand, session: &mut Session, reporter: &Reporter<'_>) {
    match cmd {
        PhotoCommand::AddFiles { paths } => handlers::handle_add_files(paths, session, reporter).await,
        PhotoCommand::AddBytes { name, data } => {
            handlers::handle_add_bytes(name, data, session, reporter)
        }
        PhotoCommand::Remove { id } => handlers::handle_remove(id, session, reporter),
        PhotoCommand::Clear => handlers::handle_clear(session, reporter),
        PhotoCommand::SetOptions { options } => {
            handlers::handle_set_options(options, session, reporter)
        }
        PhotoCommand::Generate => handlers::handle_generate(session, reporter).await,
        PhotoCommand::Save { document, target } => {
            handlers::handle_save(document, target, reporter).await
        }
    }
}
