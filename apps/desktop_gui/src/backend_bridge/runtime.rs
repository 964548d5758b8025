//! Backend worker: a dedicated thread driving a tokio runtime that services
//! queued commands against the order API.

use std::thread;

use client_core::{OrderSource, OrdersApi};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(api_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let api = OrdersApi::new(api_url);
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchOrders { generation } => {
                        tracing::debug!(generation, "fetching orders");
                        match api.fetch_orders().await {
                            Ok(orders) => {
                                tracing::info!(
                                    generation,
                                    count = orders.len(),
                                    "order fetch completed"
                                );
                                let _ = ui_tx.try_send(UiEvent::OrdersLoaded { generation, orders });
                            }
                            Err(err) => {
                                tracing::warn!(generation, "order fetch failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::OrdersFetchFailed {
                                    generation,
                                    message: err.to_string(),
                                });
                            }
                        }
                    }
                }
            }
        });
    });
}
