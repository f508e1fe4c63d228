use crate::classify::EvPolicyTable;
use crate::registry::{Registry, RegistryError};

mod ev_requires_cps_uri;


pub use ev_requires_cps_uri::EvRequiresCpsUri;

/// Register every built-in lint into `registry`.
pub fn register_builtin(registry: &mut Registry, ev: &EvPolicyTable) -> Result<(), RegistryError> {
    registry.register(Box::new(EvRequiresCpsUri::new(ev.clone())))?;
    Ok(())
}

/// Fresh registry holding the built-in lints.
pub fn builtin_registry(ev: &EvPolicyTable) -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    register_builtin(&mut registry, ev)?;
    Ok(registry)
}
