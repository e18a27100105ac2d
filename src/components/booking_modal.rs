use chrono::{Local, NaiveDate};
use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::booking::deep_link::{booking_link, open_in_new_tab};
use crate::booking::message::booking_message;
use crate::booking::modal::{ModalAction, ModalState};
use crate::booking::request::{self, BookingRequest, FormFields};
use crate::components::notification::use_notifier;
use crate::config;
use crate::dom;

fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn date_attr(date: Option<NaiveDate>) -> Option<AttrValue> {
    date.map(|d| AttrValue::from(d.format(request::DATE_FORMAT).to_string()))
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub state: UseReducerHandle<ModalState>,
    pub room_types: Vec<AttrValue>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let state = props.state.clone();
    let notifier = use_notifier();

    {
        let visible = state.visible;
        use_effect_with_deps(
            move |visible| {
                dom::set_page_scroll_locked(*visible);
                || ()
            },
            visible,
        );
    }

    {
        // Closing an already hidden modal is a no-op in the reducer
        let dispatcher = state.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                dispatcher.dispatch(ModalAction::Close);
            }
        });
    }

    let close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ModalAction::Close))
    };

    let backdrop_click = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                dispatcher.dispatch(ModalAction::Close);
            }
        })
    };

    let field = |name: &'static str| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            dispatcher.dispatch(ModalAction::SetField {
                name: name.to_string(),
                value: event_value(&e),
            });
        })
    };
    let typed = |name: &'static str| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            dispatcher.dispatch(ModalAction::SetField {
                name: name.to_string(),
                value: event_value(&e),
            });
        })
    };

    let onsubmit = {
        let fields: FormFields = state.fields.clone();
        let generation = state.generation;
        let dispatcher = state.dispatcher();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let today = Local::now().date_naive();
            let booking = match BookingRequest::validate(&fields, today) {
                Ok(booking) => booking,
                Err(err) => {
                    info!("Booking rejected: {}", err);
                    notifier.error(err.to_string());
                    return;
                }
            };

            info!("Sending booking for {} nights", booking.nights());
            open_in_new_tab(&booking_link(&booking_message(&booking)));

            dispatcher.dispatch(ModalAction::SubmitStarted);
            {
                let dispatcher = dispatcher.clone();
                Timeout::new(config::SUBMIT_BUTTON_RESET_MS, move || {
                    dispatcher.dispatch(ModalAction::SubmitFinished);
                })
                .forget();
            }
            {
                let dispatcher = dispatcher.clone();
                let notifier = notifier.clone();
                Timeout::new(config::MODAL_CLOSE_DELAY_MS, move || {
                    dispatcher.dispatch(ModalAction::CloseSubmitted { generation });
                    notifier.success("Redirecting to WhatsApp for booking confirmation!");
                })
                .forget();
            }
        })
    };

    let value = |name: &str| AttrValue::from(state.fields.value(name));
    let selected_room = state.fields.value(request::ROOM_TYPE);
    let count_options = |name: &str, from: u32, to: u32| {
        let current = state.fields.value(name);
        (from..=to)
            .map(|n| {
                let n = n.to_string();
                html! { <option value={n.clone()} selected={current == n}>{n.clone()}</option> }
            })
            .collect::<Html>()
    };

    let display = if state.visible { "display: block;" } else { "display: none;" };

    html! {
        <div id="bookingModal" class="modal" style={display} onclick={backdrop_click}>
            <div class="modal-content">
                <span class="close" onclick={close}>{"×"}</span>
                <h2>{"Book Your Stay"}</h2>
                // Rebuilt after every close; options the user picked keep their selection otherwise
                <form key={state.generation} id="bookingForm" class="booking-form" {onsubmit}>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="fullName">{"Full Name *"}</label>
                            <input type="text" id="fullName" name="fullName"
                                value={value(request::FULL_NAME)} oninput={typed(request::FULL_NAME)} />
                        </div>
                        <div class="form-group">
                            <label for="phone">{"Phone Number *"}</label>
                            <input type="tel" id="phone" name="phone" placeholder="+91 98765 43210"
                                value={value(request::PHONE)} oninput={typed(request::PHONE)} />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="checkIn">{"Check-in Date *"}</label>
                            <input type="date" id="checkIn" name="checkIn" min={date_attr(state.min_check_in)}
                                value={value(request::CHECK_IN)} onchange={field(request::CHECK_IN)} />
                        </div>
                        <div class="form-group">
                            <label for="checkOut">{"Check-out Date *"}</label>
                            <input type="date" id="checkOut" name="checkOut" min={date_attr(state.min_check_out)}
                                value={value(request::CHECK_OUT)} onchange={field(request::CHECK_OUT)} />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="roomType">{"Room Type *"}</label>
                        <select id="roomType" name="roomType" onchange={field(request::ROOM_TYPE)}>
                            <option value="" selected={selected_room.is_empty()}>{"Select a room"}</option>
                            { for props.room_types.iter().map(|room| html! {
                                <option value={room.clone()} selected={selected_room == room.as_str()}>{room.clone()}</option>
                            }) }
                        </select>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="numberOfPersons">{"Persons *"}</label>
                            <select id="numberOfPersons" name="numberOfPersons" onchange={field(request::NUMBER_OF_PERSONS)}>
                                <option value="" selected={value(request::NUMBER_OF_PERSONS).is_empty()}>{"-"}</option>
                                { count_options(request::NUMBER_OF_PERSONS, 1, 8) }
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="adults">{"Adults *"}</label>
                            <select id="adults" name="adults" onchange={field(request::ADULTS)}>
                                <option value="" selected={value(request::ADULTS).is_empty()}>{"-"}</option>
                                { count_options(request::ADULTS, 1, 6) }
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="children">{"Children"}</label>
                            <select id="children" name="children" onchange={field(request::CHILDREN)}>
                                { count_options(request::CHILDREN, 0, 4) }
                            </select>
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="specialRequests">{"Special Requests"}</label>
                        <textarea id="specialRequests" name="specialRequests" rows="3"
                            value={value(request::SPECIAL_REQUESTS)} oninput={typed(request::SPECIAL_REQUESTS)} />
                    </div>
                    <button type="submit" class="submit-button" disabled={state.submitting}>
                        if state.submitting {
                            <i class="fas fa-spinner fa-spin"></i>{" Redirecting to WhatsApp..."}
                        } else {
                            <i class="fab fa-whatsapp"></i>{" Book via WhatsApp"}
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
