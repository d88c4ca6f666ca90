//! Catalog of the standard wire structs used by the regression harnesses.
//!
//! Field names, widths, nesting and declaration order follow the signal
//! definitions of the hardware under test; changing any of them
//! desynchronizes the flattened names the testbench forces are keyed on.

use super::spec::{FieldSpec, SpecBuilder};

fn built(builder: SpecBuilder) -> FieldSpec {
    builder.finish().expect("catalog specification is well formed")
}

// APB

pub fn apb_request() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("paddr", 32)
            .bits("penable", 1)
            .bits("psel", 1)
            .bits("pwrite", 1)
            .bits("pwdata", 32),
    )
}

pub fn apb_response() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("prdata", 32)
            .bits("pready", 1)
            .bits("perr", 1),
    )
}

pub fn apb_processor_request() -> FieldSpec {
    built(FieldSpec::builder().bits("valid", 1).bits("address", 16))
}

pub fn apb_processor_response() -> FieldSpec {
    built(FieldSpec::builder().bits("acknowledge", 1).bits("rom_busy", 1))
}

pub fn apb_rom_request() -> FieldSpec {
    built(FieldSpec::builder().bits("enable", 1).bits("address", 16))
}

// CSR

pub fn csr_request() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("valid", 1)
            .bits("read_not_write", 1)
            .bits("select", 16)
            .bits("address", 16)
            .bits("data", 32),
    )
}

pub fn csr_response() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("acknowledge", 1)
            .bits("read_data_valid", 1)
            .bits("read_data_error", 1)
            .bits("read_data", 32),
    )
}

// SRAM

pub fn sram_access_req() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("valid", 1)
            .bits("id", 8)
            .bits("read_not_write", 1)
            .bits("byte_enable", 8)
            .bits("address", 32)
            .bits("write_data", 64),
    )
}

pub fn sram_access_resp() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("valid", 1)
            .bits("id", 8)
            .bits("ack", 1)
            .bits("data", 64),
    )
}

// Timer

/// Control bundle of the synchronizable timer: counter management,
/// master-lock configuration and the per-tick adder settings.
pub fn timer_control() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("reset_counter", 1)
            .bits("enable_counter", 1)
            .bits("advance", 1)
            .bits("retard", 1)
            .bits("lock_to_master", 1)
            .bits("lock_window_lsb", 2)
            .bits("synchronize", 2)
            .bits("synchronize_value", 64)
            .bits("block_writes", 1)
            .bits("bonus_subfraction_add", 8)
            .bits("bonus_subfraction_sub", 8)
            .bits("fractional_adder", 4)
            .bits("integer_adder", 8),
    )
}

pub fn timer_value() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("irq", 1)
            .bits("locked", 1)
            .bits("value", 64),
    )
}

pub fn timer_sec_nsec() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("valid", 1)
            .bits("sec", 35)
            .bits("nsec", 30),
    )
}

// I/O

pub fn uart_rx() -> FieldSpec {
    built(FieldSpec::builder().bits("rxd", 1).bits("rts", 1))
}

pub fn uart_tx() -> FieldSpec {
    built(FieldSpec::builder().bits("txd", 1).bits("cts", 1))
}

pub fn mdio() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("mdc", 1)
            .bits("mdio", 1)
            .bits("mdio_enable", 1),
    )
}

pub fn i2c() -> FieldSpec {
    built(FieldSpec::builder().bits("scl", 1).bits("sda", 1))
}

pub fn i2c_master_request() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("valid", 1)
            .bits("cont", 1)
            .bits("data", 32)
            .bits("num_in", 3)
            .bits("num_out", 3),
    )
}

pub fn i2c_master_response() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("ack", 1)
            .bits("in_progress", 1)
            .bits("response_valid", 1)
            .bits("response_type", 3)
            .bits("data", 32),
    )
}

pub fn i2c_conf() -> FieldSpec {
    built(FieldSpec::builder().bits("divider", 8).bits("period", 8))
}

// Clocking: bit delay and phase measurement

pub fn bit_delay_config() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("op", 2)
            .bits("select", 1)
            .bits("value", 9),
    )
}

pub fn bit_delay_response() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("op_ack", 1)
            .bits("delay_value", 9)
            .bits("sync_value", 1),
    )
}

pub fn phase_measure_request() -> FieldSpec {
    built(FieldSpec::builder().bits("valid", 1))
}

pub fn phase_measure_response() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("ack", 1)
            .bits("abort", 1)
            .bits("valid", 1)
            .bits("delay", 9)
            .bits("initial_delay", 9)
            .bits("initial_value", 1),
    )
}

pub fn eye_track_request() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("enable", 1)
            .bits("seek_enable", 1)
            .bits("track_enable", 1)
            .bits("measure", 1)
            .bits("phase_width", 9)
            .bits("min_eye_width", 9),
    )
}

pub fn eye_track_response() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("measure_ack", 1)
            .bits("locked", 1)
            .bits("eye_data_valid", 1)
            .bits("data_delay", 9)
            .bits("eye_width", 9)
            .bits("eye_center", 9),
    )
}

// dprintf

pub fn dprintf_byte() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("address", 16)
            .bits("data", 8)
            .bits("last", 1)
            .bits("valid", 1),
    )
}

pub fn dprintf_req_2() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("valid", 1)
            .bits("address", 16)
            .bits("data_0", 64)
            .bits("data_1", 64),
    )
}

pub fn dprintf_req_4() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("valid", 1)
            .bits("address", 16)
            .bits("data_0", 64)
            .bits("data_1", 64)
            .bits("data_2", 64)
            .bits("data_3", 64),
    )
}

// Board

/// Top-level input pins of the VCU108 board wrapper. `mdio` is the bare
/// input pin here; the full management bundle only exists on the output
/// side.
pub fn vcu108_inputs() -> FieldSpec {
    built(
        FieldSpec::builder()
            .group("i2c", i2c())
            .bits("eth_int_n", 1)
            .bits("mdio", 1)
            .group("uart_rx", uart_rx())
            .bits("switches", 4)
            .bits("buttons", 5),
    )
}

pub fn vcu108_outputs() -> FieldSpec {
    built(
        FieldSpec::builder()
            .group("i2c", i2c())
            .bits("i2c_reset_mux_n", 1)
            .bits("eth_reset_n", 1)
            .group("mdio", mdio())
            .group("uart_tx", uart_tx())
            .bits("leds", 8),
    )
}

pub fn adv7511() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("spdif", 1)
            .bits("hsync", 1)
            .bits("vsync", 1)
            .bits("de", 1)
            .bits("data", 16),
    )
}

// Network

pub fn packet_stat() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("valid", 1)
            .bits("stat_type", 3)
            .bits("byte_count", 16)
            .bits("is_broadcast", 1)
            .bits("is_multicast", 1),
    )
}

/// Receive status code points carried in `packet_stat.stat_type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PacketStatType {
    Okay = 0,
    Short = 1,
    Long = 2,
    DataError = 3,
    Carrier = 4,
}

impl PacketStatType {
    pub fn code(self) -> u8 {
        self as u8
    }
}

// Ethernet

pub fn tbi_valid() -> FieldSpec {
    built(FieldSpec::builder().bits("valid", 1).bits("data", 10))
}

pub fn gmii_tx() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("tx_en", 1)
            .bits("tx_er", 1)
            .bits("txd", 8),
    )
}

pub fn gmii_rx() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("rx_dv", 1)
            .bits("rx_er", 1)
            .bits("rxd", 8)
            .bits("rx_crs", 1),
    )
}

pub fn sgmii_gasket_control() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("write_config", 1)
            .bits("write_address", 4)
            .bits("write_data", 32),
    )
}

pub fn sgmii_gasket_status() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("rx_sync", 1)
            .bits("rx_sync_toggle", 1)
            .bits("rx_symbols_since_sync", 32)
            .bits("an_config", 16),
    )
}

/// Decoded 8b10b symbol as delivered by the receive gasket.
pub fn dec_8b10b_data() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("valid", 1)
            .bits("data", 8)
            .bits("is_control", 1)
            .bits("is_data", 1)
            .bits("disparity_positive", 1),
    )
}

pub fn symbol_8b10b() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("disparity_positive", 1)
            .bits("symbol", 10),
    )
}

pub fn enc_8b10b_data() -> FieldSpec {
    built(
        FieldSpec::builder()
            .bits("data", 8)
            .bits("is_control", 1)
            .bits("disparity", 1),
    )
}

type SpecCtor = fn() -> FieldSpec;

const CATALOG: &[(&str, SpecCtor)] = &[
    ("apb_request", apb_request),
    ("apb_response", apb_response),
    ("apb_processor_request", apb_processor_request),
    ("apb_processor_response", apb_processor_response),
    ("apb_rom_request", apb_rom_request),
    ("csr_request", csr_request),
    ("csr_response", csr_response),
    ("sram_access_req", sram_access_req),
    ("sram_access_resp", sram_access_resp),
    ("timer_control", timer_control),
    ("timer_value", timer_value),
    ("timer_sec_nsec", timer_sec_nsec),
    ("uart_rx", uart_rx),
    ("uart_tx", uart_tx),
    ("mdio", mdio),
    ("i2c", i2c),
    ("i2c_master_request", i2c_master_request),
    ("i2c_master_response", i2c_master_response),
    ("i2c_conf", i2c_conf),
    ("bit_delay_config", bit_delay_config),
    ("bit_delay_response", bit_delay_response),
    ("phase_measure_request", phase_measure_request),
    ("phase_measure_response", phase_measure_response),
    ("eye_track_request", eye_track_request),
    ("eye_track_response", eye_track_response),
    ("dprintf_byte", dprintf_byte),
    ("dprintf_req_2", dprintf_req_2),
    ("dprintf_req_4", dprintf_req_4),
    ("vcu108_inputs", vcu108_inputs),
    ("vcu108_outputs", vcu108_outputs),
    ("adv7511", adv7511),
    ("packet_stat", packet_stat),
    ("tbi_valid", tbi_valid),
    ("gmii_tx", gmii_tx),
    ("gmii_rx", gmii_rx),
    ("sgmii_gasket_control", sgmii_gasket_control),
    ("sgmii_gasket_status", sgmii_gasket_status),
    ("dec_8b10b_data", dec_8b10b_data),
    ("symbol_8b10b", symbol_8b10b),
    ("enc_8b10b_data", enc_8b10b_data),
];

/// Resolves a catalog struct by name.
pub fn lookup(name: &str) -> Option<FieldSpec> {
    CATALOG
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, ctor)| ctor())
}

/// Catalog names in their canonical declaration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(name, _)| *name)
}
