//! Fixed station table of the Dutch intercity demo network

use super::stations::{Station, StationRegistry};

/// The twelve intercity stations of the demo network, with the coordinates
/// of their main stations. Indices match the bundled connection list.
pub fn netherlands() -> StationRegistry {
    StationRegistry::new(vec![
        Station::new("Leeuwarden", 53.196_477_2, 5.792_984_9),
        Station::new("Groningen", 53.210_923_7, 6.564_102_8),
        Station::new("Meppel", 52.691_904_9, 6.197_938_2),
        Station::new("Zwolle", 52.505_008_6, 6.091_237_3),
        Station::new("Enschede", 52.222_364_9, 6.889_781_1),
        Station::new("Amsterdam", 52.378_901_0, 4.900_580_5),
        Station::new("Den Helder", 52.956_846_9, 4.760_666_3),
        Station::new("Den Haag", 52.080_763_3, 4.325_531_1),
        Station::new("Utrecht", 52.089_392_5, 5.109_821_0),
        Station::new("Eindhoven", 51.442_962_3, 5.479_526_5),
        Station::new("Nijmegen", 51.843_136_2, 5.853_091_3),
        Station::new("Maastricht", 50.850_178_3, 5.705_250_1),
    ])
}
