pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod context;
pub(crate) mod gradient;
