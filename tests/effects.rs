mod tests {
    use myrtio_effect_light::color::{BLACK, Rgb};
    use myrtio_effect_light::config::{LightConfig, StrobeTiming};
    use myrtio_effect_light::effect::{
        Effect, FireworksEffect, FlickerEffect, Frame, PulseEffect, RainbowEffect, ScanEffect,
        StrobeEffect, TwinkleEffect,
    };
    use myrtio_effect_light::state::{ColorSpec, LightState};
    use rand::{SeedableRng, rngs::SmallRng};

    fn lit_state(brightness: u8) -> LightState {
        let mut state = LightState::new(&LightConfig::default());
        state.power = true;
        state.brightness = brightness;
        state
    }

    fn gray(value: u8) -> Rgb {
        Rgb {
            r: value,
            g: value,
            b: value,
        }
    }

    #[test]
    fn test_rainbow_spreads_hue_and_rotates() {
        let state = lit_state(255);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut effect = RainbowEffect::new(3);
        let mut leds = [BLACK; 6];

        effect.render(&Frame { index: 0, state: &state }, &mut rng, &mut leds);
        assert_eq!(leds[0], Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(leds[2], Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(leds[4], Rgb { r: 0, g: 0, b: 255 });

        effect.render(&Frame { index: 1, state: &state }, &mut rng, &mut leds);
        assert_ne!(leds[0], Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_rainbow_scales_with_brightness() {
        let state = lit_state(128);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut leds = [BLACK; 6];
        RainbowEffect::new(3).render(&Frame { index: 0, state: &state }, &mut rng, &mut leds);
        assert_eq!(leds[0], Rgb { r: 128, g: 0, b: 0 });
    }

    #[test]
    fn test_strobe_alternates() {
        let state = lit_state(200);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut effect = StrobeEffect::new(StrobeTiming::ALTERNATE);
        let mut leds = [BLACK; 4];

        assert!(effect.is_on(0));
        assert!(!effect.is_on(1));
        assert!(effect.is_on(2));

        effect.render(&Frame { index: 0, state: &state }, &mut rng, &mut leds);
        assert_eq!(leds, [gray(200); 4]);
        effect.render(&Frame { index: 1, state: &state }, &mut rng, &mut leds);
        assert_eq!(leds, [BLACK; 4]);
    }

    #[test]
    fn test_strobe_custom_duty_cycle() {
        let effect = StrobeEffect::new(StrobeTiming {
            period: 5,
            on_frames: 2,
        });
        let pattern: Vec<bool> = (0..5).map(|frame| effect.is_on(frame)).collect();
        assert_eq!(pattern, [true, true, false, false, false]);
    }

    #[test]
    fn test_twinkle_toggle_rate() {
        let state = lit_state(255);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut effect = TwinkleEffect::<1000>::new();
        let mut leds = [BLACK; 1000];

        effect.render(&Frame { index: 0, state: &state }, &mut rng, &mut leds);

        let lit = effect.stars().iter().filter(|star| **star > 0).count();
        assert!((40..=120).contains(&lit), "lit stars: {lit}");
        assert!(effect.stars().iter().all(|star| *star == 0 || *star >= 180));
    }

    #[test]
    fn test_twinkle_reset_clears_stars() {
        let state = lit_state(255);
        let mut rng = SmallRng::seed_from_u64(7);
        let mut effect = TwinkleEffect::<64>::new();
        let mut leds = [BLACK; 64];
        for index in 0..20 {
            effect.render(&Frame { index, state: &state }, &mut rng, &mut leds);
        }
        assert!(effect.stars().iter().any(|star| *star > 0));

        effect.reset();
        assert!(effect.stars().iter().all(|star| *star == 0));
    }

    #[test]
    fn test_flicker_stays_below_brightness() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut leds = [BLACK; 3];

        let state = lit_state(100);
        for index in 0..200 {
            FlickerEffect.render(&Frame { index, state: &state }, &mut rng, &mut leds);
            assert!((51..=100).contains(&leds[0].r), "{:?}", leds[0]);
            assert!(leds.iter().all(|led| *led == leds[0]));
        }

        let state = lit_state(10);
        for index in 0..200 {
            FlickerEffect.render(&Frame { index, state: &state }, &mut rng, &mut leds);
            assert!(leds[0].r <= 10);
        }
    }

    #[test]
    fn test_pulse_level() {
        assert_eq!(PulseEffect::level(0, 200), 100);
        for frame in 0..200 {
            assert!(PulseEffect::level(frame, 200) <= 200);
        }
        assert!(PulseEffect::level(16, 200) >= 198);
        assert!(PulseEffect::level(47, 200) <= 2);
    }

    #[test]
    fn test_scan_position_reflects() {
        assert_eq!(ScanEffect::position(0, 10), 0);
        assert_eq!(ScanEffect::position(9, 10), 9);
        assert_eq!(ScanEffect::position(10, 10), 9);
        assert_eq!(ScanEffect::position(19, 10), 0);
        assert_eq!(ScanEffect::position(20, 10), 0);
        assert_eq!(ScanEffect::position(5, 0), 0);
    }

    #[test]
    fn test_scan_lights_window() {
        let state = lit_state(255);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut leds = [BLACK; 10];

        ScanEffect.render(&Frame { index: 5, state: &state }, &mut rng, &mut leds);
        for (i, led) in leds.iter().enumerate() {
            let expected = if (3..=7).contains(&i) { gray(255) } else { BLACK };
            assert_eq!(*led, expected, "pixel {i}");
        }

        ScanEffect.render(&Frame { index: 0, state: &state }, &mut rng, &mut leds);
        let lit = leds.iter().filter(|led| **led != BLACK).count();
        assert_eq!(lit, 3);
    }

    #[test]
    fn test_fireworks_burst_lifecycle() {
        let mut state = lit_state(255);
        state.color = ColorSpec::HueSat { hue: 0, sat: 254 };
        let mut rng = SmallRng::seed_from_u64(9);
        let mut effect = FireworksEffect::new();
        let mut leds = [BLACK; 30];

        effect.render(&Frame { index: 0, state: &state }, &mut rng, &mut leds);
        let center = effect.burst_center().expect("burst started");
        assert_ne!(leds[center], BLACK);
        for (i, led) in leds.iter().enumerate() {
            if i.abs_diff(center) > 1 {
                assert_eq!(*led, BLACK, "pixel {i}");
            }
        }

        for index in 1..=10 {
            effect.render(&Frame { index, state: &state }, &mut rng, &mut leds);
        }
        assert_eq!(effect.burst_center(), None);
        assert_eq!(leds, [BLACK; 30]);

        for index in 11..30 {
            effect.render(&Frame { index, state: &state }, &mut rng, &mut leds);
            assert_eq!(leds, [BLACK; 30]);
        }

        effect.render(&Frame { index: 30, state: &state }, &mut rng, &mut leds);
        assert!(effect.burst_center().is_some());
    }
}
