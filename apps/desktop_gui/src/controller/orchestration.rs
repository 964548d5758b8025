//! Command orchestration helpers from UI actions to the backend queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::FetchOrders { .. } => "fetch_orders",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "Backend command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker disconnected; restart the application".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;

    #[test]
    fn full_queue_reports_without_panicking() {
        let (tx, _rx) = bounded::<BackendCommand>(0);
        let mut status = String::new();

        dispatch_backend_command(&tx, BackendCommand::FetchOrders { generation: 1 }, &mut status);

        assert!(status.contains("full"));
    }

    #[test]
    fn disconnected_queue_reports_without_panicking() {
        let (tx, rx) = bounded::<BackendCommand>(4);
        drop(rx);
        let mut status = String::new();

        dispatch_backend_command(&tx, BackendCommand::FetchOrders { generation: 1 }, &mut status);

        assert!(status.contains("disconnected"));
    }

    #[test]
    fn queued_command_leaves_status_untouched() {
        let (tx, rx) = bounded::<BackendCommand>(4);
        let mut status = String::new();

        dispatch_backend_command(&tx, BackendCommand::FetchOrders { generation: 7 }, &mut status);

        assert!(status.is_empty());
        assert_eq!(
            rx.try_recv().expect("queued"),
            BackendCommand::FetchOrders { generation: 7 }
        );
    }
}
