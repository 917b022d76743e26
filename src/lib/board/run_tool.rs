use futures::stream::{FuturesUnordered, StreamExt};
use log::info;
use tokio::{
    sync::mpsc::Receiver,
    time::{sleep_until, Instant},
};

use super::{
    activity_api::ActivityApi,
    activity_board::{apply, handle_event, perform, Request, UiEvent},
    board_view::BoardView,
    document::Document,
};

/// Drives the board until `Quit` arrives or the event channel closes, then
/// waits for requests still in flight and returns the final document.
///
/// Requests overlap freely. Completions are applied one at a time in the order
/// they arrive, so the last one to finish owns the message banner.
pub async fn run<A: ActivityApi, V: BoardView>(
    api: A,
    view: &mut V,
    mut events: Receiver<UiEvent>,
) -> Document {
    let mut document = Document::new();
    view.present(&document);

    let mut in_flight = FuturesUnordered::new();
    in_flight.push(perform(&api, Request::Refresh));
    let mut accepting = true;

    while accepting || !in_flight.is_empty() {
        let hide_at = document.message.hide_deadline();
        tokio::select! {
            biased;
            Some(completion) = in_flight.next(), if !in_flight.is_empty() => {
                if let Some(follow_up) = apply(&mut document, completion) {
                    in_flight.push(perform(&api, follow_up));
                }
            }
            event = events.recv(), if accepting => match event {
                Some(UiEvent::Quit) | None => {
                    info!("No more events, waiting for {} request(s)", in_flight.len());
                    accepting = false;
                    continue;
                }
                Some(event) => {
                    if let Some(request) = handle_event(&mut document, event) {
                        in_flight.push(perform(&api, request));
                    }
                }
            },
            _ = sleep_until(hide_at.unwrap_or_else(Instant::now)), if hide_at.is_some() => {
                if !document.message.hide_if_due(Instant::now()) {
                    continue;
                }
            }
        }
        view.present(&document);
    }

    document
}
