//! Raise-ticket modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{close_modal, submit_ticket};
use crate::app::PageContext;
use crate::state::page::Modal;

/// Title and description form. A successful submit reloads the page.
#[component]
pub fn TicketModal(ctx: PageContext) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(submit_ticket(ctx, title.get_untracked(), description.get_untracked()));
    };

    view! {
        <div
            id="raiseTicketModal"
            class="modal ticket-modal"
            class:active=move || ctx.page.with(|p| p.is_open(Modal::RaiseTicket))
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2>"Raise a Ticket"</h2>
                    <button class="modal-close" on:click=move |_| close_modal(ctx, Modal::RaiseTicket) title="Close">
                        "✕"
                    </button>
                </div>

                <form id="ticketForm" class="ticket-form" on:submit=on_submit>
                    <label for="ticketTitle">"Title"</label>
                    <input
                        id="ticketTitle"
                        type="text"
                        placeholder="Short summary of the problem"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <label for="ticketDescription">"Description"</label>
                    <textarea
                        id="ticketDescription"
                        rows="5"
                        placeholder="What happened, and what did you expect?"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary">
                            "Submit Ticket"
                        </button>
                        <button type="button" class="btn btn-secondary" on:click=move |_| close_modal(ctx, Modal::RaiseTicket)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
