//! Proxmox connection form and notification placeholder.
//!
//! DESIGN
//! ======
//! The connection form is kept in this browser only. The API token value is
//! never written to storage; it has to be re-entered every time.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::state::toast::ToastState;
use crate::util::ui_persistence::{load_json, save_json};

/// `localStorage` key for the saved connection form.
pub const CONNECTION_SETTINGS_KEY: &str = "nexops.settings.proxmox";

/// Persisted part of the connection form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub token_name: String,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: "192.168.4.93".to_owned(),
            port: 8006,
            user: "nexops@pve".to_owned(),
            token_name: "nexops".to_owned(),
        }
    }
}

/// Raw text of every input, including the token value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionForm {
    pub host: String,
    pub port: String,
    pub user: String,
    pub token_name: String,
    pub token_value: String,
}

impl From<ConnectionSettings> for ConnectionForm {
    fn from(saved: ConnectionSettings) -> Self {
        Self {
            host: saved.host,
            port: saved.port.to_string(),
            user: saved.user,
            token_name: saved.token_name,
            token_value: String::new(),
        }
    }
}

impl Default for ConnectionForm {
    fn default() -> Self {
        ConnectionSettings::default().into()
    }
}

impl ConnectionForm {
    /// Validate and strip the token value.
    pub fn to_settings(&self) -> Result<ConnectionSettings, &'static str> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err("Host is required");
        }
        let port = self
            .port
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|port| *port > 0)
            .ok_or("Port must be a number between 1 and 65535")?;
        Ok(ConnectionSettings {
            host: host.to_owned(),
            port,
            user: self.user.trim().to_owned(),
            token_name: self.token_name.trim().to_owned(),
        })
    }
}

#[component]
fn TextField(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(ConnectionForm::default());
    let error = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if let Some(saved) = load_json::<ConnectionSettings>(CONNECTION_SETTINGS_KEY) {
            form.set(saved.into());
        }
    });

    let field = move |read: fn(&ConnectionForm) -> String, write: fn(&mut ConnectionForm, String)| {
        (
            Signal::derive(move || form.with(read)),
            Callback::new(move |value: String| form.update(|f| write(f, value))),
        )
    };
    let (host, set_host) = field(|f| f.host.clone(), |f, v| f.host = v);
    let (port, set_port) = field(|f| f.port.clone(), |f, v| f.port = v);
    let (user, set_user) = field(|f| f.user.clone(), |f, v| f.user = v);
    let (token_name, set_token_name) = field(|f| f.token_name.clone(), |f, v| f.token_name = v);
    let (token_value, set_token_value) = field(|f| f.token_value.clone(), |f, v| f.token_value = v);

    let on_save = move |_| match form.with_untracked(ConnectionForm::to_settings) {
        Ok(settings) => {
            error.set(None);
            if save_json(CONNECTION_SETTINGS_KEY, &settings) {
                toasts.update(|t| {
                    t.success("Connection settings saved");
                });
            } else {
                toasts.update(|t| {
                    t.error("Browser storage is unavailable; settings were not saved");
                });
            }
        }
        Err(message) => error.set(Some(message)),
    };

    view! {
        <div class="page page--narrow">
            <h1 class="page__title">"Settings"</h1>

            <section class="card">
                <h2 class="card__title">"Proxmox Connection"</h2>
                <div class="card__body form-stack">
                    <div class="form-row">
                        <TextField label="Host" placeholder="192.168.1.100" value=host on_input=set_host/>
                        <TextField label="Port" placeholder="8006" value=port on_input=set_port/>
                    </div>
                    <TextField label="User" placeholder="user@pve" value=user on_input=set_user/>
                    <div class="form-row">
                        <TextField label="API Token Name" placeholder="token-name" value=token_name on_input=set_token_name/>
                        <TextField
                            label="API Token Value"
                            kind="password"
                            placeholder="Token value"
                            value=token_value
                            on_input=set_token_value
                        />
                    </div>
                    {move || error.get().map(|message| view! { <p class="form-stack__error">{message}</p> })}
                    <div>
                        <button class="btn btn--primary" on:click=on_save>"Save Connection"</button>
                    </div>
                </div>
            </section>

            <hr class="separator"/>

            <section class="card">
                <h2 class="card__title">"Notifications"</h2>
                <p class="card__body card__muted">"Notification preferences will be available in a future update."</p>
            </section>
        </div>
    }
}
