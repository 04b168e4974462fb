use yew::prelude::*;

use crate::config;
use crate::state::modal::OverlayClick;
use crate::state::pricing::EARLY_BIRD;

#[derive(Properties, PartialEq)]
pub struct TicketModalProps {
    pub is_open: bool,
    pub on_click: Callback<OverlayClick>,
    pub on_close: Callback<()>,
}

/// QR code overlay for buying tickets.
#[function_component(TicketModal)]
pub fn ticket_modal(props: &TicketModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_backdrop = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(OverlayClick::Backdrop))
    };

    // Keep clicks inside the card away from the backdrop handler
    let on_content = {
        let on_click = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_click.emit(OverlayClick::Content);
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-overlay" onclick={on_backdrop}>
            <div class="modal-content" onclick={on_content}>
                <button class="modal-close" aria-label="Close" onclick={on_close}>{"✕"}</button>

                <div class="modal-header">
                    <h3>{"Scan to Buy Tickets"}</h3>
                    <p>{"Quick and secure payment"}</p>
                </div>

                <div class="modal-qr">
                    <img src={config::ticket_qr_url()} alt="QR Code for Ticket Purchase" />
                </div>

                <div class="modal-instructions">
                    <p class="modal-price">{EARLY_BIRD.price_line()}</p>
                    <p class="modal-hint">{"Use your phone's camera to scan the QR code above"}</p>
                    <div class="modal-tip">
                        {"💡 Tip: Point your camera at the QR code and tap the notification that appears"}
                    </div>
                </div>
            </div>
        </div>
    }
}
