pub mod harbor_inspector;
pub mod traffic_explorer;
pub mod trajectory_analyzer;

pub use harbor_inspector::HarborInspectorPage;
pub use traffic_explorer::TrafficExplorerPage;
pub use trajectory_analyzer::TrajectoryAnalyzerPage;
