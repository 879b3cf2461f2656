#[cfg(test)]
mod render_proptests {
    use proptest::prelude::*;

    use qurve::QrRenderer;

    proptest! {
        #[test]
        fn proptest_render_is_square_and_opaque(
            side in 64u32..512,
            padding in 0u32..8,
            roundness in 0f32..=1.0,
        ) {
            let mut renderer = QrRenderer::new();
            renderer.roundness(roundness).side(side).padding(padding);

            let img = renderer.render("proptest").unwrap();
            prop_assert_eq!(img.width(), img.height());
            if padding > 0 {
                prop_assert_eq!(img.width(), side);
            }
            prop_assert!(img.pixels().all(|p| p.0[3] == 0xFF));
        }

        #[test]
        fn proptest_render_is_deterministic(roundness in 0f32..=1.0, padding in 0u32..4) {
            let mut renderer = QrRenderer::new();
            renderer.roundness(roundness).side(192).padding(padding);

            let a = renderer.render("https://example.com").unwrap();
            let b = renderer.render("https://example.com").unwrap();
            prop_assert_eq!(a.as_raw(), b.as_raw());
        }

        #[test]
        fn proptest_roundness_never_flips_module_centers(roundness in 0f32..=1.0) {
            let mut sharp = QrRenderer::new();
            sharp.roundness(0.0).side(250).padding(0);
            let mut round = QrRenderer::new();
            round.roundness(roundness).side(250).padding(0);

            // 10 byte content -> version 2 -> 25 modules, cell 10
            let a = sharp.render("abcdefghij").unwrap();
            let b = round.render("abcdefghij").unwrap();
            // rounding only touches corner wedges; cell centers are invariant
            for my in 0..25u32 {
                for mx in 0..25u32 {
                    let (px, py) = (mx * 10 + 5, my * 10 + 5);
                    prop_assert_eq!(a.get_pixel(px, py), b.get_pixel(px, py));
                }
            }
        }
    }
}

#[cfg(test)]
mod render_tests {
    use test_case::test_case;

    use image::Rgba;
    use qurve::{QrRenderer, RenderError, ZonePalette};

    const GREEN: Rgba<u8> = Rgba([0x02, 0xE0, 0x6D, 0xFF]);
    const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

    #[test]
    fn test_reference_scenario() {
        let mut renderer = QrRenderer::new();
        renderer.roundness(0.85).side(256).padding(1).foreground(GREEN).background(WHITE);

        let img = renderer.render("https://github.com/MALTF").unwrap();
        assert_eq!((img.width(), img.height()), (256, 256));
        // the margin outside the module grid stays background colored
        for (x, y) in [(0, 0), (255, 0), (255, 255), (0, 255)] {
            assert_eq!(*img.get_pixel(x, y), WHITE);
        }
        // fully opaque output
        assert!(img.pixels().all(|p| p.0[3] == 0xFF));
        // the three accent colors of the default palette all show up
        for accent in [
            Rgba([0x00, 0xA5, 0xFF, 0xFF]),
            Rgba([0xFF, 0x6B, 0x36, 0xFF]),
            Rgba([0xAC, 0x0D, 0x00, 0xFF]),
        ] {
            assert!(img.pixels().any(|p| *p == accent), "missing accent {accent:?}");
        }
        // and so does the foreground
        assert!(img.pixels().any(|p| *p == GREEN));
    }

    #[test]
    fn test_sizing_error_scenario() {
        let mut renderer = QrRenderer::new();
        renderer.side(10).padding(50);
        assert_eq!(
            renderer.render("abcdefghij").unwrap_err(),
            RenderError::CellTooSmall { side: 10, padding: 50, modules: 25 }
        );
    }

    #[test]
    fn test_zero_padding_scenario() {
        let mut renderer = QrRenderer::new();
        renderer.side(256).padding(0);
        let img = renderer.render("abcdefghij").unwrap();
        // 25 modules at cell 10: cropped to exactly cell * n per axis
        assert_eq!((img.width(), img.height()), (250, 250));
        // no margin: the top left finder ring touches the canvas corner area
        assert_eq!(*img.get_pixel(15, 5), Rgba([0x00, 0xA5, 0xFF, 0xFF]));
    }

    #[test]
    fn test_encoding_error_scenario() {
        let renderer = QrRenderer::new();
        let err = renderer.render(&"x".repeat(4000)).unwrap_err();
        assert!(matches!(err, RenderError::Encoding(_)));
    }

    #[test_case("OK", 64; "short content small canvas")]
    #[test_case("Hello, world! 🌏", 256; "utf8 content")]
    #[test_case("https://github.com/MALTF", 512; "url large canvas")]
    #[test_case(&"0123456789".repeat(40), 256; "numeric heavy content")]
    fn test_render_shapes(content: &str, side: u32) {
        let mut renderer = QrRenderer::new();
        renderer.side(side).padding(1);
        let img = renderer.render(content).unwrap();
        assert_eq!((img.width(), img.height()), (side, side));
    }

    #[test]
    fn test_custom_palette_replaces_accents() {
        let navy = Rgba([0x00, 0x10, 0x40, 0xFF]);
        let palette = ZonePalette {
            top_left_outer: navy,
            top_left_inner: navy,
            bottom_left: navy,
            top_right_outer: navy,
            top_right_inner: navy,
            alignment_halo: navy,
        };
        let mut renderer = QrRenderer::new();
        renderer.side(256).padding(1).palette(palette);

        let img = renderer.render("https://github.com/MALTF").unwrap();
        assert!(img.pixels().any(|p| *p == navy));
        assert!(!img.pixels().any(|p| *p == Rgba([0x00, 0xA5, 0xFF, 0xFF])));
    }

    #[test]
    fn test_shared_renderer_serves_concurrent_callers() {
        use std::sync::Arc;
        use std::thread;

        let mut renderer = QrRenderer::new();
        renderer.side(128).padding(1);
        let renderer = Arc::new(renderer);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let renderer = Arc::clone(&renderer);
                thread::spawn(move || renderer.render(&format!("worker {i}")).unwrap())
            })
            .collect();
        for handle in handles {
            let img = handle.join().unwrap();
            assert_eq!((img.width(), img.height()), (128, 128));
        }
    }
}
