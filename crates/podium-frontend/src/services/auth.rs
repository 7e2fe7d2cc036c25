use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use podium::config::IdentityConfig;
use podium::data::IdentityUser;
use podium::errors::AuthError;
use podium::log::{error, info, warn};

#[wasm_bindgen(module = "/js/firebase.js")]
extern "C" {
    #[wasm_bindgen(js_name = initAuth, catch)]
    fn init_auth(config_json: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = googleProvider)]
    fn google_provider() -> JsValue;

    #[wasm_bindgen(js_name = subscribeAuthState)]
    fn subscribe_auth_state(auth: &JsValue, callback: &Closure<dyn FnMut(JsValue)>) -> Function;

    #[wasm_bindgen(js_name = signInWithGoogle)]
    fn sign_in_with_google(auth: &JsValue, provider: &JsValue) -> Promise;

    #[wasm_bindgen(js_name = signOutUser)]
    fn sign_out_user(auth: &JsValue) -> Promise;
}

fn js_error(value: JsValue) -> AuthError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    AuthError::Provider(message)
}

struct FirebaseHandles {
    auth: JsValue,
    provider: JsValue,
}

/// Client for the identity provider.
///
/// When the provider could not be initialized the client still works: it
/// reports "nobody signed in" to subscribers and refuses to sign anyone in.
pub struct AuthClient {
    handles: Option<FirebaseHandles>,
}

impl PartialEq for AuthClient {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl AuthClient {
    pub fn initialize(config: &IdentityConfig) -> Self {
        if !config.is_configured() {
            warn!("Identity provider is not configured; everyone is anonymous");
            return Self { handles: None };
        }

        let handles = podium::serde_json::to_string(config)
            .map_err(AuthError::from)
            .and_then(|json| init_auth(&json).map_err(js_error))
            .map(|auth| FirebaseHandles {
                auth,
                provider: google_provider(),
            });

        match handles {
            Ok(handles) => {
                info!("Identity provider initialized for {}", config.project_id);
                Self {
                    handles: Some(handles),
                }
            }
            Err(err) => {
                error!("Failed to initialize identity provider: {err}");
                Self { handles: None }
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.handles.is_some()
    }

    /// Subscribe to auth-state changes. The callback receives the signed-in
    /// user, or `None` when nobody is signed in. Dropping the returned handle
    /// unsubscribes.
    pub fn subscribe(
        &self,
        callback: impl FnMut(Option<IdentityUser>) + 'static,
    ) -> AuthSubscription {
        let callback = Rc::new(RefCell::new(callback));

        let Some(handles) = &self.handles else {
            (&mut *callback.borrow_mut())(None);
            return AuthSubscription {
                _closure: None,
                unsubscribe: None,
            };
        };

        let closure = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            let identity = match value.as_string() {
                None => None,
                Some(json) => match IdentityUser::from_json(&json) {
                    Ok(identity) => Some(identity),
                    Err(err) => {
                        error!("{}", AuthError::MalformedUser(err));
                        return;
                    }
                },
            };
            (&mut *callback.borrow_mut())(identity);
        });

        let unsubscribe = subscribe_auth_state(&handles.auth, &closure);

        AuthSubscription {
            _closure: Some(closure),
            unsubscribe: Some(unsubscribe),
        }
    }

    /// Open the Google sign-in popup.
    pub async fn sign_in_with_google(&self) -> Result<IdentityUser, AuthError> {
        let handles = self.handles.as_ref().ok_or(AuthError::Unavailable)?;
        let value = JsFuture::from(sign_in_with_google(&handles.auth, &handles.provider))
            .await
            .map_err(js_error)?;

        let json = value
            .as_string()
            .ok_or_else(|| AuthError::Provider("sign-in returned no user".to_string()))?;
        Ok(IdentityUser::from_json(&json)?)
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let handles = self.handles.as_ref().ok_or(AuthError::Unavailable)?;
        JsFuture::from(sign_out_user(&handles.auth))
            .await
            .map_err(js_error)?;
        Ok(())
    }
}

/// A live auth-state subscription.
pub struct AuthSubscription {
    _closure: Option<Closure<dyn FnMut(JsValue)>>,
    unsubscribe: Option<Function>,
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            if let Err(err) = unsubscribe.call0(&JsValue::NULL) {
                warn!("Failed to unsubscribe from auth state: {}", js_error(err));
            }
        }
    }
}
