// Hardware Abstraction Layer (HAL) Module
//
// Implementiert den FrameSink-Trait aus strip-core für das ESP32 RMT
// Peripheral. Die Logik im Task bleibt dadurch hardware-unabhängig.

pub mod rmt_sink;

pub use rmt_sink::{RMT_BUFFER_SIZE, RmtFrameSink};
