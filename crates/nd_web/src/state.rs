use nd_agents::DigestPipeline;

pub struct AppState {
    pub pipeline: DigestPipeline,
}
