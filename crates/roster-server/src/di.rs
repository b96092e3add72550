//! Dependency injection module using Shaku.

use roster_service::StaticUserService;
use shaku::module;
use std::sync::Arc;

// Single-process module. The user service owns the fixed record set, built
// once when the module is built.
module! {
    pub RosterModule {
        components = [
            StaticUserService,
        ],
        providers = [],
    }
}

/// Builds the application module.
#[must_use]
pub fn build_module() -> Arc<RosterModule> {
    Arc::new(RosterModule::builder().build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_service::{seed_users, UserService};
    use shaku::HasComponent;

    #[test]
    fn test_module_provides_user_service() {
        fn _assert_has_user_service<T: HasComponent<dyn UserService>>() {}

        _assert_has_user_service::<RosterModule>();
    }

    #[test]
    fn test_resolved_service_serves_seed_users() {
        let module = build_module();
        let service: Arc<dyn UserService> = module.resolve();
        assert_eq!(service.list_users(), seed_users().as_slice());
    }

    #[test]
    fn test_resolve_returns_same_instance() {
        let module = build_module();
        let first: Arc<dyn UserService> = module.resolve();
        let second: Arc<dyn UserService> = module.resolve();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
