use std::ops::Deref;
use std::rc::Rc;

use yew::prelude::*;

use podium::session::{Session, SessionAction};

/// The session wrapped for `use_reducer`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState(Session);

impl Deref for SessionState {
    type Target = Session;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.0.clone();
        session.apply(action);
        Rc::new(SessionState(session))
    }
}

pub type SessionHandle = UseReducerHandle<SessionState>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::default);

    html! {
        <ContextProvider<SessionHandle> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session must be used within a SessionProvider")
}
