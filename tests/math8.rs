mod tests {
    use myrtio_effect_light::math8::{fraction8, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_full_scale_is_lossless() {
        for value in 0..=255u8 {
            assert_eq!(scale8(value, 255), value);
        }
    }

    #[test]
    fn test_fraction8() {
        assert_eq!(fraction8(0.0, 200), 0);
        assert_eq!(fraction8(0.5, 200), 100);
        assert_eq!(fraction8(1.0, 200), 200);
        assert_eq!(fraction8(1.5, 200), 200);
        assert_eq!(fraction8(-0.5, 200), 0);
    }
}
