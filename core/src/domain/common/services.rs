use std::time::Duration;

/// Application service holding every outbound port.
///
/// Each domain implements its service trait on this struct, so a single value
/// carries the whole use-case surface and tests can swap any port for a double.
#[derive(Clone)]
pub struct Service<U, H, W, WO, HM, HC, LLM> {
    pub(crate) user_repository: U,
    pub(crate) hasher_repository: H,
    pub(crate) weight_repository: W,
    pub(crate) workout_repository: WO,
    pub(crate) health_metric_repository: HM,
    pub(crate) health_check_repository: HC,
    pub(crate) completion_client: LLM,
    pub(crate) completion_timeout: Duration,
}

impl<U, H, W, WO, HM, HC, LLM> Service<U, H, W, WO, HM, HC, LLM> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        hasher_repository: H,
        weight_repository: W,
        workout_repository: WO,
        health_metric_repository: HM,
        health_check_repository: HC,
        completion_client: LLM,
        completion_timeout: Duration,
    ) -> Self {
        Self {
            user_repository,
            hasher_repository,
            weight_repository,
            workout_repository,
            health_metric_repository,
            health_check_repository,
            completion_client,
            completion_timeout,
        }
    }
}
