pub(crate) mod local_provider;
pub(crate) mod remote_provider;

pub use local_provider::LocalProvider;
pub use remote_provider::RemoteProvider;
