//! End-to-end conversion pipelines over the public API.

use imagetools_algorithms::prelude::*;

/// 4x3 RGBA test card with a distinct value in every channel.
fn rgba_card() -> ImageBuffer {
    let (width, height) = (4usize, 3usize);
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let base = (y * width + x) as u8 * 10;
            data.extend_from_slice(&[base, base + 1, base + 2, 255 - base]);
        }
    }
    ImageBuffer::from_vec(width, height, 4, data).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn alpha_then_rgb_then_float() {
    init_tracing();
    let mut image = rgba_card();

    convert_alpha_to_greyscale(&mut image).unwrap();
    assert_eq!(image.channels(), 1);
    assert_eq!(image.pixel::<u8>(1, 2).unwrap(), &[255 - 90]);

    convert_to_rgb(&mut image).unwrap();
    assert_eq!(image.channels(), 3);
    assert_eq!(image.pixel::<u8>(1, 2).unwrap(), &[165, 165, 165]);

    convert_to_float(&mut image).unwrap();
    assert_eq!(image.element_type(), ElementType::Float);
    assert_eq!((image.width(), image.height(), image.channels()), (4, 3, 3));
    let px = image.pixel::<f32>(0, 0).unwrap();
    assert!(px.iter().all(|&v| v == 1.0));
}

#[test]
fn float_greyscale_matches_ubyte_greyscale() {
    let mut ubyte = ImageBuffer::from_vec(1, 1, 3, vec![100u8, 200, 50]).unwrap();
    let mut float = ubyte.clone();

    convert_to_greyscale(&mut ubyte).unwrap();
    convert_to_float(&mut float).unwrap();
    convert_to_greyscale(&mut float).unwrap();

    assert_eq!(ubyte.as_slice::<u8>().unwrap(), &[140]);
    let grey = float.as_slice::<f32>().unwrap()[0];
    assert!((grey * 255.0 - 140.0).abs() < 1e-3);
}

#[test]
fn round_trip_preserves_every_ubyte_value() {
    let values: Vec<u8> = (0..=255u8).cycle().take(256 * 3).collect();
    let mut image = ImageBuffer::from_vec(16, 16, 3, values.clone()).unwrap();

    convert_to_float(&mut image).unwrap();
    convert_to_ubyte(&mut image).unwrap();

    assert_eq!(image.as_slice::<u8>().unwrap(), values.as_slice());
}

#[test]
fn every_transform_rejects_empty_buffer_without_mutation() {
    let transforms: [(&str, fn(&mut ImageBuffer) -> Result<()>); 5] = [
        ("convert_to_float", convert_to_float),
        ("convert_to_ubyte", convert_to_ubyte),
        ("convert_alpha_to_greyscale", convert_alpha_to_greyscale),
        ("convert_to_greyscale", convert_to_greyscale),
        ("convert_to_rgb", convert_to_rgb),
    ];

    let empties = [
        ImageBuffer::empty(),
        ImageBuffer::new(ElementType::Float, 0, 4, 4).unwrap(),
        ImageBuffer::new(ElementType::UByte, 4, 0, 1).unwrap(),
    ];

    for empty in &empties {
        for (name, transform) in &transforms {
            let mut image = empty.clone();
            assert_eq!(transform(&mut image), Err(Error::InvalidBuffer), "{name}");
            assert_eq!(&image, empty, "{name} mutated an invalid buffer");
        }
    }
}

#[test]
fn failed_transforms_leave_buffer_intact() {
    let original = rgba_card();

    let mut image = original.clone();
    assert!(matches!(
        convert_to_rgb(&mut image),
        Err(Error::WrongChannelCount { expected: 1, actual: 4 })
    ));
    assert_eq!(image, original);

    assert!(matches!(
        convert_to_ubyte(&mut image),
        Err(Error::WrongSourceType {
            expected: ElementType::Float,
            actual: ElementType::UByte
        })
    ));
    assert_eq!(image, original);
}

#[test]
fn algorithm_trait_chain() {
    let image = rgba_card();
    assert_eq!(AlphaToGreyscale.name(), "AlphaToGreyscale");

    let grey = Greyscale.execute_default(image).unwrap();
    let rgb = ToRgb.execute_default(grey).unwrap();
    let float = ToFloat.execute_default(rgb).unwrap();
    let back = ToUbyte.execute_default(float).unwrap();

    // pixel (0, 0) = (0, 1, 2, 255) -> mean 64.5 -> 64
    assert_eq!(back.pixel::<u8>(0, 0).unwrap(), &[64, 64, 64]);
}

#[test]
fn sampler_reads_converted_buffers() {
    let mut image = rgba_card();
    let before = sub_pixel(&image, 1.5, 0.5).unwrap();

    convert_to_float(&mut image).unwrap();
    let after = sub_pixel(&image, 1.5, 0.5).unwrap();

    for (b, a) in before.iter().zip(&after) {
        assert!((b / 255.0 - a).abs() < 1e-5);
    }

    let edge = sub_pixel(&image, 3.0, 2.0).unwrap();
    let beyond = sub_pixel(&image, 3.9, 2.9).unwrap();
    assert_eq!(edge, beyond);
}
