mod hsv;
mod utils;
mod xy;

pub use hsv::{hsv_degrees_to_rgb, hsv_to_rgb};
use smart_leds::RGB8;
pub use utils::{BLACK, WHITE, scale_rgb};
pub use xy::xy_to_rgb;

pub type Rgb = RGB8;
