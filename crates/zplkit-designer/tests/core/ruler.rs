use proptest::prelude::*;
use zplkit_core::{thread_safe, MeasurementUnit, Orientation, ViewEvent, ViewEventBus};
use zplkit_designer::ruler::{RulerModel, TickSteps};

fn any_unit() -> impl Strategy<Value = MeasurementUnit> {
    prop_oneof![
        Just(MeasurementUnit::Millimeter),
        Just(MeasurementUnit::Centimeter),
        Just(MeasurementUnit::Inch),
    ]
}

#[test]
fn test_step_table() {
    let mm = TickSteps::for_unit(MeasurementUnit::Millimeter);
    assert_eq!((mm.major_mm, mm.minor_mm, mm.decimals), (5.0, 2.0, 0));
    let cm = TickSteps::for_unit(MeasurementUnit::Centimeter);
    assert_eq!((cm.major_mm, cm.minor_mm, cm.decimals), (10.0, 5.0, 1));
    let inch = TickSteps::for_unit(MeasurementUnit::Inch);
    assert_eq!((inch.major_mm, inch.minor_mm, inch.decimals), (25.4, 3.175, 2));
}

#[test]
fn test_major_ticks_are_longer() {
    let ruler = RulerModel::horizontal(10.0, 203.0);
    let ticks = ruler.ticks();
    assert_eq!(ticks[0].mark_length(), 10.0);
    assert_eq!(ticks[1].mark_length(), 5.0);
    assert_eq!(ticks[0].label.as_deref(), Some("0"));
    assert_eq!(ticks[1].label, None);
}

#[test]
fn test_tick_pixels_follow_scale() {
    let mut ruler = RulerModel::horizontal(25.4, 203.0);
    ruler.set_unit(MeasurementUnit::Inch);
    ruler.update_scale(2.0);
    let last = ruler.ticks().pop().unwrap();
    assert_eq!(last.position_px, 406.0);
    assert_eq!(last.label.as_deref(), Some("1.00"));
}

#[test]
fn test_attached_ruler_follows_bus() {
    let bus = ViewEventBus::new();
    let ruler = thread_safe(RulerModel::horizontal(100.0, 203.0));
    let id = RulerModel::attach(&ruler, &bus);

    bus.publish(ViewEvent::ScaleChanged { scale: 2.0 });
    bus.publish(ViewEvent::LengthChanged {
        orientation: Orientation::Horizontal,
        length_mm: 60.0,
    });
    bus.publish(ViewEvent::SelectionBoundsChanged {
        bounds_mm: Some((5.0, 6.0, 7.0, 8.0)),
    });
    {
        let ruler = ruler.lock();
        assert_eq!(ruler.scale_factor(), 2.0);
        assert_eq!(ruler.length_mm(), 60.0);
        assert_eq!(ruler.highlighted_bounds(), Some((5.0, 7.0)));
    }

    assert!(bus.unsubscribe(id));
    bus.publish(ViewEvent::ScaleChanged { scale: 3.0 });
    assert_eq!(ruler.lock().scale_factor(), 2.0);
}

#[test]
fn test_out_of_range_scale_is_clamped() {
    let mut ruler = RulerModel::vertical(10.0, 203.0);
    ruler.update_scale(50.0);
    assert_eq!(ruler.scale_factor(), 10.0);
}

proptest! {
    #[test]
    fn ticks_are_sorted_unique_and_bounded(
        length in 0.0f64..300.0,
        unit in any_unit(),
        scale in 0.5f64..10.0,
    ) {
        let mut ruler = RulerModel::horizontal(length, 203.0);
        ruler.set_unit(unit);
        ruler.update_scale(scale);
        let ticks = ruler.ticks();

        prop_assert_eq!(ticks[0].position_mm, 0.0);
        prop_assert!(ticks[0].major);
        for pair in ticks.windows(2) {
            prop_assert!(pair[0].position_mm < pair[1].position_mm);
            prop_assert!(pair[0].position_px <= pair[1].position_px);
        }
        for tick in &ticks {
            prop_assert!(tick.position_mm <= length + 1e-9);
            prop_assert_eq!(tick.major, tick.label.is_some());
        }
    }
}

#[test]
fn test_every_whole_inch_is_labelled() {
    let mut ruler = RulerModel::horizontal(101.6, 203.0);
    ruler.set_unit(MeasurementUnit::Inch);
    let labels: Vec<String> = ruler.ticks().into_iter().filter_map(|t| t.label).collect();
    assert_eq!(labels, vec!["0.00", "1.00", "2.00", "3.00", "4.00"]);
}
