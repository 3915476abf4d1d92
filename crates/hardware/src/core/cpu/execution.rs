//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU:
//! 1. **Fetch:** Reads the word at `pc` through the bus into the instruction register.
//! 2. **Execute:** Decodes the word, applies its effect, and commits `next_pc` to `pc`.
//! 3. **Run:** Repeats until EBREAK or an illegal opcode halts the CPU.
//!
//! `x0` is forced to zero before and after every execute step. Bus faults raised by loads and
//! stores are reported by the bus and never stop the loop.

use super::{Cpu, CpuState, HaltReason};
use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::Fault;
use crate::isa::decode::decode;
use crate::isa::disasm::format_instruction;
use crate::isa::instruction::Instruction;
use crate::soc::traits::MemoryBus;

impl<B: MemoryBus> Cpu<B> {
    /// Reads the instruction at `pc` into the instruction register.
    pub fn fetch(&mut self) {
        self.ir = self.bus.read_u32(self.pc);
        self.state = CpuState::Execute;
    }

    /// Executes the word in the instruction register and advances `pc`.
    pub fn execute(&mut self) {
        let pc = self.pc;
        self.next_pc = pc.wrapping_add(INSTRUCTION_SIZE);
        self.regs.clear_zero();

        let inst = decode(self.ir);
        if self.trace {
            tracing::trace!(
                "pc={pc:#010x} inst={:#010x} {}",
                self.ir,
                format_instruction(&inst)
            );
        }

        match inst {
            Instruction::Lui { rd, imm } => self.regs.write(rd, imm),
            Instruction::Auipc { rd, imm } => self.regs.write(rd, pc.wrapping_add(imm)),
            Instruction::Jal { rd, offset } => {
                self.regs.write(rd, pc.wrapping_add(INSTRUCTION_SIZE));
                self.next_pc = pc.wrapping_add_signed(offset);
                self.stats.inst_jump += 1;
            }
            Instruction::Jalr { rd, rs1, imm } => {
                // Target is computed before the link write in case rd == rs1.
                let target = self.regs.read(rs1).wrapping_add_signed(imm) & !1;
                self.regs.write(rd, pc.wrapping_add(INSTRUCTION_SIZE));
                self.next_pc = target;
                self.stats.inst_jump += 1;
            }
            Instruction::Beq { rs1, rs2, offset } => {
                self.stats.inst_branch += 1;
                if self.regs.read(rs1) == self.regs.read(rs2) {
                    self.next_pc = pc.wrapping_add_signed(offset);
                    self.stats.branches_taken += 1;
                }
            }
            Instruction::Lbu { rd, rs1, imm } => {
                let addr = self.regs.read(rs1).wrapping_add_signed(imm);
                let val = self.bus.read_u8(addr);
                self.regs.write(rd, u32::from(val));
                self.stats.inst_load += 1;
            }
            Instruction::Sb { rs1, rs2, imm } => {
                let addr = self.regs.read(rs1).wrapping_add_signed(imm);
                self.bus.write_u8(addr, self.regs.read(rs2) as u8);
                self.stats.inst_store += 1;
            }
            Instruction::Addi { rd, rs1, imm } => {
                self.regs
                    .write(rd, self.regs.read(rs1).wrapping_add_signed(imm));
            }
            Instruction::Ebreak => {
                tracing::debug!("EBREAK at {pc:#010x}");
                self.next_pc = pc;
                self.set_halted(HaltReason::Breakpoint { pc });
            }
            Instruction::Illegal { opcode } => {
                self.bus.report_fault(Fault::IllegalOpcode { opcode, pc });
                self.next_pc = pc;
                self.set_halted(HaltReason::IllegalOpcode { opcode, pc });
            }
        }

        self.pc = self.next_pc;
        self.regs.clear_zero();
        self.stats.instructions_retired += 1;
        if !self.is_halted() {
            self.state = CpuState::Fetch;
        }
    }

    /// Runs one full fetch-execute cycle.
    ///
    /// Does nothing once the CPU is halted. Returns the halt reason if this step (or an earlier
    /// one) stopped the CPU.
    pub fn step(&mut self) -> Option<HaltReason> {
        if self.is_halted() {
            return self.halt_reason();
        }
        self.fetch();
        self.execute();
        self.halt_reason()
    }

    /// Runs until the CPU halts and returns why it stopped.
    pub fn run(&mut self) -> HaltReason {
        self.stats.start_timer();
        loop {
            if let Some(reason) = self.step() {
                return reason;
            }
        }
    }
}
