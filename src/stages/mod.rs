pub mod stage0_clean;
pub mod stage1_enrich;
pub mod stage2_aggregate;
pub mod stage3_render;

pub use stage0_clean::*;
pub use stage1_enrich::*;
pub use stage2_aggregate::*;
pub use stage3_render::*;
