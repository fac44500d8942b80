#![doc = r#"
grainpress — a single-shot image re-texturing pipeline.

One decoded image goes through five stages in a fixed order and comes out as a
JPEG:

1. **Upscale** 3× with a Lanczos kernel (window size 4).
2. **Sharpen** with a subtle unsharp mask: `1.1 * image - 0.1 * gaussian(image, σ = 2.0)`.
3. **Add noise**: zero-mean Gaussian, σ = 1.5, independently per channel.
4. **Resize** back to the original size with an area filter, or to 1536 px on the
   long side when the original is larger than that.
5. **Encode** as JPEG at quality 85.

Every intermediate step clamps to the 8-bit range; nothing wraps around.

Quick start
-----------
```rust,no_run
use std::path::Path;

fn main() -> grainpress::Result<()> {
    let dims = grainpress::process_file_to_path(
        Path::new("in/photo.png"),
        Path::new("out/photo.jpg"),
    )?;
    println!("wrote {dims}");
    Ok(())
}
```

Reproducible output
-------------------
The noise stage draws from the thread-local RNG. Pass your own RNG to get the
same bytes twice:

```rust
use grainpress::{ImageTransformer, RasterImage};
use rand::SeedableRng;
use rand::rngs::StdRng;

let transformer = ImageTransformer::default();
let input = RasterImage::from_pixel(40, 30, image::Rgb([120, 80, 40]));
let a = transformer.transform_with_rng(input.clone(), &mut StdRng::seed_from_u64(7)).unwrap();
let b = transformer.transform_with_rng(input, &mut StdRng::seed_from_u64(7)).unwrap();
assert_eq!(a, b);
assert_eq!(a.dimensions(), (40, 30));
```

Error handling
--------------
All public functions return `grainpress::Result<T>`. `Error::is_decode()` and
`Error::is_encode()` split failures into the input side and the output side.

Useful modules
--------------
- [`api`] — `ImageTransformer` and file-to-file helpers.
- [`core`] — `PipelineParams` and the individual stages.
- [`io`] — decoding and JPEG writing.
- [`types`] — `RasterImage`, `Dimensions`, `ScaleFactor`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::params::PipelineParams;
pub use error::{Error, Result};
pub use types::{Dimensions, RasterImage, ScaleFactor};

pub use api::{ImageTransformer, process_file_to_path};
pub use crate::core::processing::resize::final_dimensions;
pub use io::{load_image, write_rgb_jpeg};
