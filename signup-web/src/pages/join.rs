//! Join Airdrop Page
//!
//! The signup form. Keeps the element ids the tasks page and existing
//! stylesheets rely on: `airdropForm`, the four input ids and `message`.

use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lib_signup::{SignupConfig, SignupContext, SignupController, SubmitOutcome};

use crate::services::{BrowserApi, LocalStore, LocationNavigator, TimeoutScheduler};
use crate::state::signup::SignupState;
use crate::utils::constants::{API_BASE, INVALID_BORDER_STYLE, REFERRAL_QUERY_PARAM};
use crate::utils::url::get_query_param;

type Controller = SignupController<BrowserApi>;

fn build_controller(state: SignupState) -> Controller {
    let config = SignupConfig {
        api_base: API_BASE.to_string(),
        ..SignupConfig::default()
    };
    let ctx = SignupContext {
        form: Rc::new(state),
        status: Rc::new(state),
        storage: Rc::new(LocalStore),
        navigator: Rc::new(LocationNavigator),
        scheduler: Rc::new(TimeoutScheduler),
    };
    SignupController::new(BrowserApi::new(config.join_url()), ctx, config)
}

#[component]
pub fn JoinPage() -> impl IntoView {
    let state = SignupState::new();

    if let Some(code) = get_query_param(REFERRAL_QUERY_PARAM) {
        log::debug!("Referral code from link: {}", code);
        state.referral_code.set(code);
    }

    let controller = StoredValue::new_local(Rc::new(build_controller(state)));

    let on_wallet_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        controller.with_value(|c| c.on_wallet_input(&value));
        state.wallet_address.set(value);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            match controller.submit().await {
                SubmitOutcome::Joined(_) => log::info!("Joined airdrop, redirecting shortly"),
                SubmitOutcome::Busy => log::debug!("Submit ignored while a request is in flight"),
                other => log::debug!("Submit finished: {:?}", other),
            }
        });
    };

    view! {
        <div class="content-wrapper">
            <div class="container">
                <div class="card">
                    <h1 class="card-title">"Join the Airdrop"</h1>
                    <p class="subtitle">"Register your wallet to take part in the token distribution."</p>

                    <form id="airdropForm" on:submit=on_submit>
                        <label for="wallet_address">"Wallet address"</label>
                        <input
                            id="wallet_address"
                            name="wallet_address"
                            type="text"
                            placeholder="0x..."
                            autocomplete="off"
                            style=move || if state.wallet_field.get().is_invalid() { INVALID_BORDER_STYLE } else { "" }
                            prop:value=move || state.wallet_address.get()
                            on:input=on_wallet_input
                        />

                        <label for="email">"Email (optional)"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            prop:value=move || state.email.get()
                            on:input=move |ev| state.email.set(event_target_value(&ev))
                        />

                        <label for="twitter_handle">"Twitter handle (optional)"</label>
                        <input
                            id="twitter_handle"
                            name="twitter_handle"
                            type="text"
                            placeholder="@handle"
                            prop:value=move || state.twitter_handle.get()
                            on:input=move |ev| state.twitter_handle.set(event_target_value(&ev))
                        />

                        <label for="referral_code">"Referral code (optional)"</label>
                        <input
                            id="referral_code"
                            name="referral_code"
                            type="text"
                            prop:value=move || state.referral_code.get()
                            on:input=move |ev| state.referral_code.set(event_target_value(&ev))
                        />

                        <button type="submit" class="btn">"Join Airdrop"</button>
                    </form>

                    <div id="message" class=move || state.status_class()>
                        {move || state.status_text()}
                    </div>
                </div>
            </div>
        </div>
    }
}
