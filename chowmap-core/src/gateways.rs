use crate::entities::MapPoint;

/// Where the user currently is, if that can be determined at all.
///
/// Implementations must degrade to `None` on every failure,
/// callers never see an error from this gateway.
pub trait LocationGateway {
    fn current_position(&self) -> Option<MapPoint>;
}
