use skimap_portal::hue::{HueCycle, OFF_FRAME, STRIP_LEN};
use smart_leds::hsv::{Hsv, hsv2rgb};

#[test]
fn off_frame_is_all_black() {
    assert!(OFF_FRAME.iter().all(|led| led.r == 0 && led.g == 0 && led.b == 0));
}

#[test]
fn first_frame_walks_consecutive_hues_from_zero() {
    let mut cycle = HueCycle::new();
    let frame = cycle.tick();

    for (i, led) in frame.iter().enumerate() {
        let expected = hsv2rgb(Hsv {
            hue: i as u8,
            sat: 255,
            val: 255,
        });
        assert_eq!(*led, expected, "led {i}");
    }
}

#[test]
fn base_hue_advances_by_strip_length_each_tick() {
    let mut cycle = HueCycle::new();
    let first = cycle.tick();
    let second = cycle.tick();

    // The second frame starts where the first ended.
    let expected = hsv2rgb(Hsv {
        hue: STRIP_LEN as u8,
        sat: 255,
        val: 255,
    });
    assert_eq!(second[0], expected);
    assert_ne!(first[0], second[0]);
}

#[test]
fn hue_wraps_around_the_color_wheel() {
    let mut cycle = HueCycle::new();
    // 13 ticks of 20 steps: base passes 255 and wraps (260 % 256 == 4).
    let mut frame = [smart_leds::RGB::default(); STRIP_LEN];
    for _ in 0..13 {
        frame = cycle.tick();
    }
    let expected = hsv2rgb(Hsv {
        hue: 240,
        sat: 255,
        val: 255,
    });
    assert_eq!(frame[0], expected);

    let wrapped = cycle.tick();
    let expected = hsv2rgb(Hsv {
        hue: 4,
        sat: 255,
        val: 255,
    });
    assert_eq!(wrapped[0], expected);
}
