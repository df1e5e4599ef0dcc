pub mod camera;
pub mod color;
pub mod config;
pub mod extract;
pub mod lod;
pub mod scratch;
pub mod shape;

pub use camera::{ScreenCamera, ScreenPoint, ViewProjection, DEFAULT_HANDLE_PIXELS};
pub use color::{fill_color, multiply_alpha, CONVEX_FILL_ALPHA, SOLID_FILL_ALPHA};
pub use config::{ConfigError, SilhouetteConfig, MAX_SILHOUETTE_POINTS};
pub use extract::{
	extract_silhouette, extract_silhouette_into, project, Silhouette, SilhouetteError,
};
pub use lod::{CircleResolution, LodThresholds};
pub use scratch::{SilhouetteScratch, MAX_CLOUD_POINTS};
pub use shape::{
	sphere_disc, BoxOutline, CapsuleAxis, CapsuleOutline, CircleOutline, FlatCapsuleOutline,
	OutlineKind, RoundedRectOutline, ShapeSampler, SphereDisc, SphereOutline,
};
