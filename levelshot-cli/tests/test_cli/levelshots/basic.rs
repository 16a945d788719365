use crate::add_test;
use crate::common::{tga_image, Fixture, BSP_DATA};

// Test a single plain levelshot is converted to JPEG
add_test!(converts_plain_levelshot, async {
    let tga = tga_image(64, 48);
    let fixture = Fixture::with_archive(
        "map-q3dm1.pk3",
        &[("maps/q3dm1.bsp", BSP_DATA), ("levelshots/q3dm1.tga", &tga)],
    );

    let output = fixture.run(&[&fixture.input_arg()]).await;
    assert!(output.status.success(), "stderr: {}", output.stderr);

    assert_eq!(fixture.output_files(), vec!["q3dm1.jpg"]);
    assert_eq!(fixture.jpeg_dimensions("q3dm1.jpg"), (64, 48));
});

// Test plain and color-corrected variants are both converted
add_test!(converts_color_corrected_variant, async {
    let plain = tga_image(32, 32);
    let cc = tga_image(40, 20);
    let fixture = Fixture::with_archive(
        "map-q3dm17.pk3",
        &[
            ("maps/q3dm17.bsp", BSP_DATA),
            ("levelshots/q3dm17.tga", &plain),
            ("levelshots/q3dm17_cc.tga", &cc),
        ],
    );

    let output = fixture.run(&[&fixture.input_arg()]).await;
    assert!(output.status.success());

    assert_eq!(fixture.output_files(), vec!["q3dm17.jpg", "q3dm17_cc.jpg"]);
    assert_eq!(fixture.jpeg_dimensions("q3dm17.jpg"), (32, 32));
    assert_eq!(fixture.jpeg_dimensions("q3dm17_cc.jpg"), (40, 20));
});

// Test every map in every archive is processed
add_test!(processes_all_archives_and_maps, async {
    let tga = tga_image(16, 16);
    let fixture = Fixture::with_archive(
        "pak0.pk3",
        &[
            ("maps/q3dm1.bsp", BSP_DATA),
            ("maps/q3dm2.bsp", BSP_DATA),
            ("levelshots/q3dm1.tga", &tga),
            ("levelshots/q3dm2.tga", &tga),
        ],
    );
    fixture.add_archive(
        "map-ztn.pk3",
        &[("maps/ztn3tourney1.bsp", BSP_DATA), ("levelshots/ztn3tourney1_cc.tga", &tga)],
    );

    let output = fixture.run(&[&fixture.input_arg()]).await;
    assert!(output.status.success());

    assert_eq!(
        fixture.output_files(),
        vec!["q3dm1.jpg", "q3dm2.jpg", "ztn3tourney1_cc.jpg"]
    );
});

// Test running twice leaves the same set of files with the same content
add_test!(rerun_is_idempotent, async {
    let tga = tga_image(24, 24);
    let fixture = Fixture::with_archive(
        "pak0.pk3",
        &[("maps/dm.bsp", BSP_DATA), ("levelshots/dm.tga", &tga)],
    );

    let output = fixture.run(&[&fixture.input_arg()]).await;
    assert!(output.status.success());
    let first = std::fs::read(fixture.output_path("dm.jpg")).unwrap();

    let output = fixture.run(&[&fixture.input_arg()]).await;
    assert!(output.status.success());
    let second = std::fs::read(fixture.output_path("dm.jpg")).unwrap();

    assert_eq!(first, second);
    assert_eq!(fixture.output_files(), vec!["dm.jpg"]);
});
