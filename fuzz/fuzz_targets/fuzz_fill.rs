#![no_main]
use libfuzzer_sys::fuzz_target;
use zenraster::*;

fuzz_target!(|data: &[u8]| {
    // First 6 bytes pick geometry, orientation and chunk size; the rest is pixel data
    let [w, h, bpp, descriptor, chunk_lo, chunk_hi, pixels @ ..] = data else {
        return;
    };
    let header = ImageHeader::new(u32::from(*w), u32::from(*h), u32::from(*bpp));
    let orientation = Orientation::from_descriptor(*descriptor);
    let config = FillConfig::default()
        .with_buffer_size(usize::from(u16::from_le_bytes([*chunk_lo, *chunk_hi])));

    // Must never panic, and both copy strategies must agree
    let backed = fill(
        orientation,
        &mut SliceSource::new(pixels),
        &header,
        &config,
        &enough::Unstoppable,
    );
    let streamed = fill(
        orientation,
        &mut Sequential::new(SliceSource::new(pixels)),
        &header,
        &config,
        &enough::Unstoppable,
    );

    match (backed, streamed) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a, b, "copy strategies disagree");
            assert_eq!(a.pixels().len(), a.stride() * a.height() as usize);
            assert_eq!(a.stride() % 4, 0);
        }
        (Err(_), Err(_)) => {}
        (a, b) => panic!("copy strategies disagree on success: {a:?} vs {b:?}"),
    }
});
