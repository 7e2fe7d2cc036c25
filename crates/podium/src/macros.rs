#[macro_export]
/// Define a Yew callback whose body runs as a spawned local future.
///
/// Every listed variable is cloned once when the callback is built and again
/// each time it fires, so the body owns its handles for the whole `await`.
///
/// Without an event parameter:
/// ```compile_fail
/// let sign_out = async_callback!([auth, error_msg] {
///     if let Err(err) = auth.sign_out().await {
///         error_msg.set(Some(err.to_string()));
///     }
/// });
/// ```
///
/// With an event parameter:
/// ```compile_fail
/// let on_submit = async_callback!([storage, set_loading] |event| {
///     event.prevent_default();
///     set_loading.emit(true);
///     // upload ...
///     set_loading.emit(false);
/// });
/// ```
///
/// The expansion is the usual clone-then-`spawn_local` dance:
/// ```compile_fail
/// let auth_clone = auth.clone();
/// let sign_out = Callback::from(move |_| {
///     let auth = auth_clone.clone();
///     wasm_bindgen_futures::spawn_local(async move {
///         let _ = auth.sign_out().await;
///     });
/// });
/// ```
macro_rules! async_callback {
    // Version with event parameter
    ([$($var:ident),* $(,)?] |$event:ident| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
    // Version without event parameter
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
