pub(crate) mod runtime;
pub(crate) mod timezone;

pub(crate) use runtime::runtime_version;
pub(crate) use timezone::Timezone;
