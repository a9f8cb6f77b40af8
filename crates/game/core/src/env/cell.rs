//! Sprite catalog identifiers stored in the world grid.
//!
//! Every cell of the map holds one [`CellId`]. The discriminants double as
//! indices into the sprite catalog, so they must never be renumbered.

use strum::{EnumIter, FromRepr, IntoStaticStr};

/// Terrain, furniture, actor or item sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(FromRepr, EnumIter, IntoStaticStr)]
#[repr(u8)]
pub enum CellId {
    Blank = 0,
    Tree = 1,
    Brick = 2,
    Gray = 3,
    Man = 4,
    Man2 = 5,
    GlobalView1 = 6,
    GlobalView2 = 7,
    GlobalView3 = 8,
    GlobalView4 = 9,
    GlobalView5 = 10,
    GlobalView6 = 11,
    /// Tower entrance.
    GlobalView7 = 12,
    GlobalView8 = 13,
    Dr = 14,
    DrHouse1 = 15,
    DrHouse2 = 16,
    DrHouse3 = 17,
    /// Door of the doctor's house, hidden behind whoever guards it.
    DrHouse4 = 18,
    DrHouse5 = 19,
    DrHouse6 = 20,
    Sleep = 21,
    Office1 = 22,
    Office2 = 23,
    Smile = 24,
    Office3 = 25,
    /// Lab entrance.
    Office4 = 26,
    Office5 = 27,
    Office6 = 28,
    Chemical = 29,
    RichHouse1 = 30,
    RichHouse2 = 31,
    RichHouse3 = 32,
    RichHouse4 = 33,
    RichHouse5 = 34,
    RichHouse6 = 35,
    RichHouse7 = 36,
    RichHouse8 = 37,
    RichHouse9 = 38,
    Rapid1 = 40,
    Rapid2 = 41,
    Rapid3 = 42,
    Rapid4 = 43,
    /// Transit station entrance.
    Rapid5 = 44,
    Rapid6 = 45,
    DoorClose = 46,
    DoorOpen = 47,
    Stair1 = 48,
    Stair2 = 49,
    Flower = 50,
    Home1 = 51,
    Home2 = 52,
    /// Entrance of the player's home.
    Home3 = 53,
    Home4 = 54,
    Table = 55,
    Cabinet = 56,
    Girl = 57,
    Bed = 58,
    Police = 59,
    Slingshot = 60,
    TicketMachine = 61,
    Money = 62,
    Ticket = 63,
    Cellphone = 64,
    StreetLamp = 65,
    Invoice = 66,
    Computer = 67,
    Cc800 = 68,
    Water = 69,
    CabinetOpen = 70,
    BadManL = 71,
    BadManR = 72,
    RapidCar1 = 73,
    RapidCar2 = 74,
    RapidCar3 = 75,
    Track = 76,
    Closestool = 77,
    ToiletPaper = 78,
    Sad = 79,
    Assistant = 80,
}

impl CellId {
    /// Raw catalog index.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Collision classifier.
    ///
    /// Passability is an allow-list; any id not named here blocks movement.
    pub const fn is_walkable(self) -> bool {
        matches!(
            self,
            CellId::Blank
                | CellId::DoorOpen
                | CellId::Rapid5
                | CellId::GlobalView7
                | CellId::Stair1
                | CellId::Stair2
                | CellId::Office4
                | CellId::Home3
                | CellId::Bed
                | CellId::DrHouse4
                | CellId::RapidCar1
                | CellId::RapidCar2
                | CellId::RapidCar3
        )
    }
}
