#[cfg(test)]
mod unit_tests {
    use crate::calc::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_altima_quarter_tank_estimate() {
        let vehicle = find_vehicle("Nissan Altima 2010 2.5L");
        let estimate = fill_estimate(vehicle, 25, 1.50);
        assert!(close(estimate.capacity, 75.7));
        assert!(close(estimate.current_amount, 18.925));
        assert!(close(estimate.liters_needed, 56.775));
        assert!(close(estimate.total_cost, 85.1625));
        assert_eq!(format_liters(estimate.liters_needed), "56.8L");
        assert_eq!(format_cost(estimate.total_cost), "$85.16");
    }

    #[test]
    fn test_no_vehicle_means_all_zero() {
        let estimate = fill_estimate(None, 60, 2.0);
        assert!(close(estimate.capacity, 0.0));
        assert!(close(estimate.current_amount, 0.0));
        assert!(close(estimate.liters_needed, 0.0));
        assert!(close(estimate.total_cost, 0.0));
    }

    #[test]
    fn test_every_vehicle_resolves_by_name() {
        for vehicle in VEHICLES {
            let found = find_vehicle(vehicle.name).expect("vehicle should resolve");
            assert_eq!(found.capacity, vehicle.capacity);
        }
    }

    #[test]
    fn test_unknown_vehicle_name_is_none() {
        assert!(find_vehicle("DeLorean DMC-12").is_none());
        assert!(find_vehicle("").is_none());
    }

    #[test]
    fn test_current_amount_follows_percentage() {
        let vehicle = find_vehicle("Ford Ranger 2007");
        for percentage in [0u8, 10, 50, 90, 100] {
            let estimate = fill_estimate(vehicle, percentage, 1.0);
            assert!(close(estimate.current_amount, 64.4 * percentage as f64 / 100.0));
            assert!(close(estimate.liters_needed, 64.4 - estimate.current_amount));
        }
    }

    #[test]
    fn test_liters_needed_never_increases_with_level() {
        let vehicle = find_vehicle("Mazda Tribute 2002");
        let mut previous = fill_estimate(vehicle, 0, 1.0).liters_needed;
        for percentage in 1u8..=100 {
            let needed = fill_estimate(vehicle, percentage, 1.0).liters_needed;
            assert!(needed <= previous + 1e-9);
            previous = needed;
        }
    }

    #[test]
    fn test_full_tank_costs_nothing() {
        let estimate = fill_estimate(find_vehicle("Toyota Echo 2000"), 100, 3.25);
        assert!(close(estimate.liters_needed, 0.0));
        assert!(close(estimate.total_cost, 0.0));
    }

    #[test]
    fn test_cost_is_zero_without_a_price() {
        let estimate = fill_estimate(find_vehicle("Toyota Echo 2000"), 30, 0.0);
        assert!(close(estimate.total_cost, 0.0));
    }

    #[test]
    fn test_switching_vehicles_switches_capacity() {
        let mazda = fill_estimate(find_vehicle("Mazda Tribute 2002"), 40, 1.25);
        let echo = fill_estimate(find_vehicle("Toyota Echo 2000"), 40, 1.25);
        assert!(close(mazda.capacity, 62.09));
        assert!(close(echo.capacity, 45.046));
        assert!(mazda.liters_needed > echo.liters_needed);
    }

    #[test]
    fn test_percentage_clamping() {
        assert_eq!(clamp_percentage(-5), 0);
        assert_eq!(clamp_percentage(0), 0);
        assert_eq!(clamp_percentage(42), 42);
        assert_eq!(clamp_percentage(100), 100);
        assert_eq!(clamp_percentage(250), 100);
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!(parse_price("1.50"), 1.5);
        assert_eq!(parse_price("  2.75 "), 2.75);
        assert_eq!(parse_price("0"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_price("NaN"), 0.0);
        assert_eq!(parse_price("inf"), 0.0);
        assert_eq!(parse_price("-3.20"), -3.2);
    }

    #[test]
    fn test_presentation_formatting() {
        assert_eq!(format_liters(56.775), "56.8L");
        assert_eq!(format_liters(0.0), "0.0L");
        assert_eq!(format_cost(85.1625), "$85.16");
        assert_eq!(format_cost(0.0), "$0.00");
    }
}

#[cfg(test)]
mod i18n_tests {
    use crate::i18n::{I18nService, Language};

    #[test]
    fn test_translate_per_language() {
        let spanish = I18nService::new(Language::EsEs);
        let english = I18nService::new(Language::EnUs);
        assert_eq!(spanish.translate("m-file"), "Archivo");
        assert_eq!(english.translate("m-file"), "File");
        assert_eq!(spanish.translate("app-title"), "Calculadora de Gasolina");
    }

    #[test]
    fn test_unknown_key_echoes_back() {
        let service = I18nService::new(Language::EsEs);
        assert_eq!(service.translate("no-such-key"), "no-such-key");
    }

    #[test]
    fn test_placeholder_substitution() {
        let service = I18nService::new(Language::EnUs);
        let text = service.translate_args(
            "results-summary",
            &[("liters", "56.8L"), ("cost", "$85.16")],
        );
        assert_eq!(text, "You need 56.8L, at a cost of $85.16, to fill the tank.");
    }

    #[test]
    fn test_language_switching() {
        let mut service = I18nService::new(Language::EnUs);
        service.set_language(Language::EsEs);
        assert_eq!(service.translate("mi-exit"), "Salir");
    }

    #[test]
    fn test_locale_detection() {
        assert_eq!(Language::from_locale("es-MX"), Language::EsEs);
        assert_eq!(Language::from_locale("es"), Language::EsEs);
        assert_eq!(Language::from_locale("en-GB"), Language::EnUs);
        assert_eq!(Language::from_locale("de-DE"), Language::EnUs);
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::from_tag("es-ES"), Some(Language::EsEs));
        assert_eq!(Language::from_tag("en-US"), Some(Language::EnUs));
        assert_eq!(Language::from_tag("fr-FR"), None);
    }
}
