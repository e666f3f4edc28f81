#![no_main]
use lanediv::{floor_div, Lanes, SignedDivider, UnsignedDivider};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|items: Vec<i64>| {
    if items.is_empty() {
        return;
    }
    let d = items[0];

    macro_rules! run_unsigned {
        ($T:ty, $N:expr) => {{
            let d = d as $T;
            if d != 0 {
                let divider = UnsignedDivider::new(d);
                for chunk in items.chunks($N) {
                    let mut lanes = [0 as $T; $N];
                    for (lane, item) in lanes.iter_mut().zip(chunk) {
                        *lane = *item as $T;
                    }
                    let trunc = (Lanes::from_array(lanes) / &divider).into_array();
                    let floor = divider.apply_floor(Lanes::from_array(lanes)).into_array();
                    for (i, &a) in lanes.iter().enumerate() {
                        assert_eq!(trunc[i], a / d, "{} {} / {}", stringify!($T), a, d);
                        assert_eq!(floor[i], a / d, "{} {} fdiv {}", stringify!($T), a, d);
                    }
                }
            }
        }};
    }

    macro_rules! run_signed {
        ($T:ty, $N:expr) => {{
            let d = d as $T;
            if d != 0 {
                let divider = SignedDivider::new(d);
                for chunk in items.chunks($N) {
                    let mut lanes = [0 as $T; $N];
                    for (lane, item) in lanes.iter_mut().zip(chunk) {
                        *lane = *item as $T;
                    }
                    let trunc = (Lanes::from_array(lanes) / &divider).into_array();
                    let floor = divider.apply_floor(Lanes::from_array(lanes)).into_array();
                    for (i, &a) in lanes.iter().enumerate() {
                        if a == <$T>::MIN && d == -1 {
                            // divide with overflow; the lane path saturates
                            assert_eq!(trunc[i], <$T>::MIN);
                        } else {
                            assert_eq!(trunc[i], a / d, "{} {} / {}", stringify!($T), a, d);
                        }
                        assert_eq!(floor[i], floor_div(a, d), "{} {} fdiv {}", stringify!($T), a, d);
                    }
                }
            }
        }};
    }

    run_unsigned!(u64, 2);
    run_unsigned!(u32, 4);
    run_unsigned!(u16, 8);
    run_unsigned!(u8, 16);
    run_signed!(i64, 2);
    run_signed!(i32, 4);
    run_signed!(i16, 8);
    run_signed!(i8, 16);
});
