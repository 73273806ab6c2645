/// Label used when the caller does not pick a meal time.
pub const DEFAULT_MEAL_TIME: &str = "전체";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    fn index(self) -> usize {
        match self {
            MealSlot::Breakfast => 0,
            MealSlot::Lunch => 1,
            MealSlot::Dinner => 2,
            MealSlot::Snack => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    All,
}

impl MealTime {
    /// Resolves a caller label. Unknown labels fall back to [`MealTime::All`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "아침" => MealTime::Breakfast,
            "점심" => MealTime::Lunch,
            "저녁" => MealTime::Dinner,
            "간식" => MealTime::Snack,
            _ => MealTime::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealTime::Breakfast => "아침",
            MealTime::Lunch => "점심",
            MealTime::Dinner => "저녁",
            MealTime::Snack => "간식",
            MealTime::All => DEFAULT_MEAL_TIME,
        }
    }

    pub fn slots(self) -> SlotSet {
        match self {
            MealTime::Breakfast => SlotSet::only(MealSlot::Breakfast),
            MealTime::Lunch => SlotSet::only(MealSlot::Lunch),
            MealTime::Dinner => SlotSet::only(MealSlot::Dinner),
            MealTime::Snack => SlotSet::only(MealSlot::Snack),
            MealTime::All => SlotSet::all(),
        }
    }
}

/// Instruction attached to a slot in the output template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRule {
    Fill,
    Empty,
}

impl SlotRule {
    pub fn instruction(self) -> &'static str {
        match self {
            SlotRule::Fill => "반드시 채워라",
            SlotRule::Empty => "빈 문자열로 둬라",
        }
    }
}

/// The four meal slots, each flagged active or inactive for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSet {
    meal_time: MealTime,
    active: [bool; 4],
}

impl SlotSet {
    pub fn all() -> Self {
        Self {
            meal_time: MealTime::All,
            active: [true; 4],
        }
    }

    fn only(slot: MealSlot) -> Self {
        let mut active = [false; 4];
        active[slot.index()] = true;

        let meal_time = match slot {
            MealSlot::Breakfast => MealTime::Breakfast,
            MealSlot::Lunch => MealTime::Lunch,
            MealSlot::Dinner => MealTime::Dinner,
            MealSlot::Snack => MealTime::Snack,
        };

        Self { meal_time, active }
    }

    /// The meal time this set was resolved from.
    pub fn meal_time(&self) -> MealTime {
        self.meal_time
    }

    pub fn is_active(&self, slot: MealSlot) -> bool {
        self.active[slot.index()]
    }

    pub fn active(&self) -> impl Iterator<Item = MealSlot> + '_ {
        MealSlot::ALL
            .into_iter()
            .filter(|slot| self.is_active(*slot))
    }

    pub fn rule(&self, slot: MealSlot) -> SlotRule {
        if self.is_active(slot) {
            SlotRule::Fill
        } else {
            SlotRule::Empty
        }
    }
}

pub fn active_slots(meal_time: &str) -> SlotSet {
    MealTime::from_label(meal_time).slots()
}
