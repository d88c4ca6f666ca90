//! End-to-end wire-format checks against the recorded testbench
//! configurations of the sgmii and vcu108 regression harnesses.

use wirebundle::bundle::{flatten, registry, Bundle, FieldSpec, ValueMap};
use wirebundle::harness::{PortFlags, PortSet};

#[test]
fn sgmii_harness_outputs_match_recorded_forces() {
    let mut ports = PortSet::new("clk");
    ports
        .add_bundle("gmii_tx", registry::gmii_tx(), PortFlags::OUTPUT)
        .add_bundle("tbi_rx", registry::tbi_valid(), PortFlags::OUTPUT)
        .add_bundle(
            "sgmii_gasket_control",
            registry::sgmii_gasket_control(),
            PortFlags::OUTPUT,
        )
        .add_wire("sgmii_rxd", 4, PortFlags::OUTPUT)
        .add_bundle("tbi_tx", registry::tbi_valid(), PortFlags::INPUT)
        .add_bundle("gmii_rx", registry::gmii_rx(), PortFlags::INPUT);

    assert_eq!(
        ports.outputs(),
        "gmii_tx__tx_en gmii_tx__tx_er gmii_tx__txd[8] \
         tbi_rx__valid tbi_rx__data[10] \
         sgmii_gasket_control__write_config sgmii_gasket_control__write_address[4] \
         sgmii_gasket_control__write_data[32] sgmii_rxd[4]",
        "output list should match the recorded sgmii testbench forces"
    );
    assert_eq!(
        ports.inputs(),
        "tbi_tx__valid tbi_tx__data[10] \
         gmii_rx__rx_dv gmii_rx__rx_er gmii_rx__rxd[8] gmii_rx__rx_crs",
        "input list should match the recorded sgmii testbench forces"
    );
}

#[test]
fn vcu108_video_pins_flatten_like_the_board_wrapper() {
    // the adv7511 bundle is instantiated as vcu108_video in the debug harness
    let video = Bundle::new("vcu108_video", registry::adv7511());
    assert_eq!(
        video.name_list().join(" "),
        "vcu108_video__spdif vcu108_video__hsync vcu108_video__vsync \
         vcu108_video__de vcu108_video__data[16]"
    );
}

#[test]
fn vcu108_debug_forces_round_trip_through_the_port_set() {
    let leds = FieldSpec::builder().bits("leds", 8).finish().expect("leds");
    let mut ports = PortSet::new("clk");
    ports
        .add_wire("reset_n", 1, PortFlags::INPUT)
        .add_wire("uart_txd", 1, PortFlags::INPUT)
        .add_bundle("vcu108_leds", leds, PortFlags::INPUT)
        .add_bundle("vcu108_video", registry::adv7511(), PortFlags::INPUT)
        .add_wire("uart_rxd", 1, PortFlags::OUTPUT)
        .add_wire("vcu108_inputs__switches", 4, PortFlags::OUTPUT)
        .add_wire("vcu108_inputs__buttons", 5, PortFlags::OUTPUT)
        .set_force("dut.apb_rom.filename", "roms/apb_uart_tx_rom.mif");

    let forces = ports.forces();
    assert_eq!(forces[0], ("th.clock".to_owned(), "clk".to_owned()));
    assert_eq!(
        forces[1].1,
        "reset_n uart_txd vcu108_leds__leds[8] vcu108_video__spdif \
         vcu108_video__hsync vcu108_video__vsync vcu108_video__de vcu108_video__data[16]",
        "th.inputs should match the recorded vcu108 debug forces"
    );
    assert_eq!(
        forces[2].1,
        "uart_rxd vcu108_inputs__switches[4] vcu108_inputs__buttons[5]",
        "th.outputs should match the recorded vcu108 debug forces"
    );
    assert_eq!(
        forces[3],
        (
            "dut.apb_rom.filename".to_owned(),
            "roms/apb_uart_tx_rom.mif".to_owned()
        )
    );
}

#[test]
fn timer_control_values_survive_a_pack_cycle() {
    // the settings the gbe receive path programs before enabling its timer
    let timer = Bundle::standard("rx_timer_control", "timer_control").expect("catalog struct");
    let mut values = ValueMap::default();
    for (name, _) in timer.flatten() {
        values.insert(name, 0);
    }
    values.insert("rx_timer_control__integer_adder".to_owned(), 1);
    values.insert("rx_timer_control__enable_counter".to_owned(), 1);

    let bits = timer.pack(&values).expect("pack timer control");
    assert_eq!(bits.len(), 92, "timer control packs to its total width");
    let recovered = timer.unpack(&bits).expect("unpack timer control");
    assert_eq!(recovered, values, "pack then unpack is lossless");
}

#[test]
fn flattening_is_stable_across_calls() {
    let spec = registry::vcu108_outputs();
    let first = flatten(&spec, "vcu108_outputs");
    let second = flatten(&spec, "vcu108_outputs");
    assert_eq!(first, second, "joined signal lists key recorded configurations");
    assert_eq!(
        first.first().map(|(name, _)| name.as_str()),
        Some("vcu108_outputs__i2c__scl"),
        "nested groups flatten depth first from the first declaration"
    );
}
