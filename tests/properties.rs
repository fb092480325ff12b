//! Property tests for the validation and windowing rules

use gamry_script::{ check_range, sweep_window, Polarity };
use proptest::prelude::*;

proptest!
{
    #[test]
    fn sweep_window_always_orders_its_bounds(
        ev1 in -15.0f64..15.0,
        ev2 in -15.0f64..15.0,
    )
    {
        let (high, low, polarity) = sweep_window(ev1, ev2);

        prop_assert!(high >= low);
        prop_assert_eq!(high, ev1.max(ev2));
        prop_assert_eq!(low, ev1.min(ev2));

        if ev1 > ev2 {
            prop_assert_eq!(polarity, Polarity::Positive);
        }
        else {
            prop_assert_eq!(polarity, Polarity::Negative);
        }
    }

    #[test]
    fn check_range_fails_exactly_outside_the_bounds(
        value in -100.0f64..100.0,
        low in -50.0f64..0.0,
        span in 0.0f64..50.0,
    )
    {
        let high = low + span;
        let outcome = check_range(value, low, high, "Eini", "V");

        if value < low || value > high {
            prop_assert!(outcome.is_err());
        }
        else {
            prop_assert!(outcome.is_ok());
        }
    }
}
