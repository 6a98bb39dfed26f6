/*!
cpu::mod - Public façade for the 6502 CPU core.

Module layout:

```text
status.rs       - Processor status register (NV-BDIZC bitfield).
state.rs        - Core CPU state (registers, stack helpers) + constructors.
addressing.rs   - Addressing mode enum & operand resolution helpers.
execute.rs      - Instruction semantic helpers (ALU, flags, compares).
opcodes.rs      - Static 256-entry dispatch table and opcode handlers.
core.rs         - `Cpu` facade: reset, step, run, run_with_callback.
```

The public surface is the `Cpu` facade (wrapping `CpuState`). Downstream
code should not rely on internal module layout.
*/

pub mod addressing;
pub mod core;
pub mod execute;
pub mod opcodes;
pub mod state;
pub mod status;

pub use crate::cpu::addressing::AddressingMode;
pub use crate::cpu::core::Cpu;
pub use crate::cpu::state::CpuState;
pub use crate::cpu::status::Status;
