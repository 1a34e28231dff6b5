/// Working canvas side length. Every uploaded image is resampled to this
/// square resolution before any screen runs, so all pixel-count and
/// geometric thresholds below are defined against this canvas.
pub const CANVAS_SIDE: u32 = 512;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Small epsilon to avoid division by zero when forming the skin ratio.
pub const SKIN_RATIO_EPSILON: f32 = 1e-5;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Grayscale intensity above which a pixel counts as "white" for the
/// glare check (230 on the 8-bit scale).
pub const WHITE_INTENSITY_CUTOFF: f32 = 230.0 / 255.0;

/// Grayscale intensity above which a pixel counts as non-background for
/// the circular-field overlap (5 on the 8-bit scale).
pub const BACKGROUND_INTENSITY_CUTOFF: f32 = 5.0 / 255.0;

/// Default maximum green/red ratio before an image is called skin-like.
pub const DEFAULT_SKIN_RATIO_MAX: f32 = 0.85;

/// Default maximum fraction of white pixels before an image is called glare.
pub const DEFAULT_WHITE_PIXEL_MAX: f32 = 0.40;

/// Default fundus-field radius as a fraction of the half-canvas.
pub const DEFAULT_FIELD_RADIUS_FRACTION: f32 = 0.80;

/// Default minimum fraction of non-background pixels inside the field disk.
pub const DEFAULT_CIRCLE_OVERLAP_MIN: f32 = 0.05;

/// Default hue cutoff (degrees) below which a pixel counts as red/orange.
pub const DEFAULT_RED_ORANGE_HUE_MAX_DEG: f32 = 60.0;

/// Default minimum fraction of red/orange pixels.
pub const DEFAULT_RED_ORANGE_MIN: f32 = 0.02;

/// Default center tolerance (pixels, per axis) for the iris rejection.
pub const DEFAULT_IRIS_CENTER_TOLERANCE_PX: f32 = 20.0;

/// Gaussian blur sigma applied before circle detection. Equivalent to the
/// 7x7 kernel the tuning was established with.
pub const IRIS_BLUR_SIGMA: f32 = 1.4;

/// Iris search band, relative to the fundus-field radius.
pub const IRIS_MIN_RADIUS_FRACTION: f32 = 0.8;
pub const IRIS_MAX_RADIUS_FRACTION: f32 = 1.1;

/// Default inverse resolution of the Hough center accumulator.
pub const DEFAULT_ACCUMULATOR_RATIO: f32 = 1.3;

/// Default minimum distance (pixels) between detected circle centers.
pub const DEFAULT_MIN_CENTER_DISTANCE: f32 = 150.0;

/// Default Sobel magnitude (8-bit scale) above which a pixel is an edge.
pub const DEFAULT_EDGE_THRESHOLD: f32 = 80.0;

/// Default minimum accumulator votes for a circle candidate.
pub const DEFAULT_ACCUMULATOR_THRESHOLD: u32 = 35;
