//! Stock/waste cycling (draw one, unlimited recycles).

use tracing::debug;

use crate::game::GameState;

impl GameState {
    /// Turn the top stock card onto the waste, or, when the stock is empty,
    /// flip the whole waste back over into the stock.
    ///
    /// Either way, afterwards only the top waste card is playable.
    pub fn turn_stock(&mut self) {
        if self.stock.is_empty() {
            // Each waste card goes under the previous one, which reverses the
            // waste and restores the original draw order.
            let recycled = self.waste.take_all();
            let count = recycled.len();
            for mut pc in recycled {
                pc.face_up_offset = 0.0;
                pc.face_down = true;
                pc.playable = false;
                self.stock.insert_bottom(pc);
            }
            debug!(count, "recycled waste into stock");
        } else {
            for pc in self.waste.iter_mut() {
                pc.face_up_offset = 0.0;
            }
            if let Some(mut pc) = self.stock.pop() {
                pc.face_down = false;
                pc.playable = false;
                pc.face_up_offset = self.options.waste_face_up_offset;
                debug!(card = %pc.card, remaining = self.stock.len(), "turned stock");
                self.waste.push(pc);
            }
        }

        let top = self.waste.len().saturating_sub(1);
        for (i, pc) in self.waste.iter_mut().enumerate() {
            pc.playable = i == top;
        }
    }

    /// Whether turning the stock would change anything.
    pub fn can_turn_stock(&self) -> bool {
        !self.stock.is_empty() || !self.waste.is_empty()
    }
}
