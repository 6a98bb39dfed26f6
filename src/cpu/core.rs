/*!
core.rs - `Cpu` facade: reset, single-step, and the run loop.

`Cpu` owns a `CpuState` and drives fetch/decode/execute against a `Bus`:

```text
let mut cpu = Cpu::new();
bus.load_program(0x0600, &program);
cpu.reset(&bus);
cpu.run(&mut bus)?;
```

`step` executes exactly one instruction; `run` steps until a BRK halts
the CPU or an error surfaces (unknown opcode, write into ROM).
`run_with_callback` is the embedder hook: the callback observes and may
mutate CPU and bus before every instruction, which is how tracing,
input polling, or scripted test harnesses attach without threading
through the core.
*/

use crate::bus::Bus;
use crate::cpu::opcodes;
use crate::cpu::state::CpuState;
use crate::error::EmuError;

pub struct Cpu {
    state: CpuState,
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
        }
    }

    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state.halted
    }

    /// Reinitialize registers and load PC from the reset vector ($FFFC).
    pub fn reset(&mut self, bus: &Bus) {
        self.state = CpuState::new();
        self.state.pc = bus.read_u16(Bus::RESET_VECTOR);
    }

    /// Fetch, decode, and execute a single instruction.
    pub fn step(&mut self, bus: &mut Bus) -> Result<(), EmuError> {
        let pc = self.state.pc;
        let opcode = self.state.fetch_u8(bus);
        let entry = opcodes::lookup(opcode).ok_or(EmuError::UnknownOpcode { opcode, pc })?;
        entry.execute(&mut self.state, bus)
    }

    /// Run until BRK halts the CPU or an error surfaces.
    pub fn run(&mut self, bus: &mut Bus) -> Result<(), EmuError> {
        self.run_with_callback(bus, |_, _| {})
    }

    /// Run like `run`, invoking `callback` before each instruction.
    pub fn run_with_callback<F>(&mut self, bus: &mut Bus, mut callback: F) -> Result<(), EmuError>
    where
        F: FnMut(&mut CpuState, &mut Bus),
    {
        while !self.state.halted {
            callback(&mut self.state, bus);
            self.step(bus)?;
        }
        Ok(())
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
