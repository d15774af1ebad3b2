// Metrea LLC Intellectual Property
// Originally developed by Raw Socket Labs LLC
mod context;
mod timing;

pub(crate) use context::HopContext;
pub(crate) use timing::HopTiming;
