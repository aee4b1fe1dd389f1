/// Stable stand-in for the unstable `!` type: the control loop never returns
/// under normal operation, so "success" is uninhabited.
#[derive(Debug)]
pub enum Never {}
