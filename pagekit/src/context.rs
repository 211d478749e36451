//! The request data the helpers read from the host framework.

/// Read-only view of the request being rendered.
pub trait RequestContext {
    /// Namespaced type name of the handler, e.g. `Super::Awesome::AnimeController`.
    fn handler_type_name(&self) -> &str;
    /// Action verb as routed, e.g. `update`.
    fn raw_action_name(&self) -> &str;
}

impl<T: RequestContext + ?Sized> RequestContext for &T {
    fn handler_type_name(&self) -> &str {
        (**self).handler_type_name()
    }

    fn raw_action_name(&self) -> &str {
        (**self).raw_action_name()
    }
}

/// A request context built from plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRequest {
    pub handler: String,
    pub action: String,
}

impl StaticRequest {
    pub fn new(handler: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            action: action.into(),
        }
    }
}

impl RequestContext for StaticRequest {
    fn handler_type_name(&self) -> &str {
        &self.handler
    }

    fn raw_action_name(&self) -> &str {
        &self.action
    }
}
