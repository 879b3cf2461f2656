use std::error::Error;

use image::Rgba;
use qurve::QrRenderer;

fn main() -> Result<(), Box<dyn Error>> {
    let mut renderer = QrRenderer::new();
    renderer
        .roundness(0.85)
        .side(256)
        .padding(1)
        .foreground(Rgba([0x02, 0xE0, 0x6D, 0xFF]))
        .background(Rgba([0xFF, 0xFF, 0xFF, 0xFF]));

    let img = renderer.render("https://github.com/MALTF")?;
    img.save("qurve.png")?;
    println!("rendered {}x{} -> qurve.png", img.width(), img.height());

    Ok(())
}
