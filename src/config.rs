use figment::Figment;
use figment::providers::Env;
use std::sync::OnceLock;

static CONFIG: OnceLock<Figment> = OnceLock::new();

pub fn get_config() -> &'static Figment {
    CONFIG.get_or_init(build_config)
}

pub(crate) fn build_config() -> Figment {
    Figment::new()
        .merge(Env::prefixed("OXIMETA_").split("_"))
        .merge(Env::prefixed("OXIMETA_"))
}
