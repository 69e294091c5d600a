use crate::cpu::{Bus, Cpu, State};
use crate::pacer::Pacer;

impl<'a, B: Bus, P: Pacer> Cpu<'a, B, P> {
    pub(super) fn exec_nop(&self) -> u32 {
        4
    }

    pub(super) fn exec_stop(&mut self) -> u32 {
        // The padding byte is skipped without being fetched, so a STOP in
        // the last program byte still stops.
        let pc = self.regs.pc;
        self.state = State::Stopped;
        log::info!(
            "STOP at PC=0x{pc:04X} after {} cycles",
            self.cycles.wrapping_add(4)
        );
        4
    }
}
