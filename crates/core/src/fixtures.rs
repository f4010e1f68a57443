// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demonstration data for a freshly started tracker.

use promo_tracker_domain::{
    DeliveryMethod, DomainError, Item, ItemId, PrintType, STAGE_COUNT, StaffDirectory,
    StaffMember, StageName, StageRecord,
};
use time::Date;
use time::macros::date;

/// One row of the demonstration data: completion day and staff id per stage.
type StagePlan = [Option<(Date, u32)>; STAGE_COUNT];

struct SeedItem {
    sequence: u32,
    name: &'static str,
    client: &'static str,
    quantity: u32,
    print_type: PrintType,
    delivery_method: DeliveryMethod,
    manager_id: u32,
    plan: StagePlan,
}

const SEED: [SeedItem; 3] = [
    SeedItem {
        sequence: 1,
        name: "기업 노트북 가방",
        client: "ABC 기업",
        quantity: 500,
        print_type: PrintType::Laser,
        delivery_method: DeliveryMethod::Courier,
        manager_id: 3,
        plan: [
            Some((date!(2024 - 03 - 25), 1)),
            Some((date!(2024 - 03 - 26), 4)),
            Some((date!(2024 - 03 - 27), 4)),
            Some((date!(2024 - 03 - 28), 6)),
            Some((date!(2024 - 03 - 29), 7)),
        ],
    },
    SeedItem {
        sequence: 2,
        name: "판촉용 우산",
        client: "삼성전자",
        quantity: 200,
        print_type: PrintType::Transfer,
        delivery_method: DeliveryMethod::DirectPickup,
        manager_id: 2,
        plan: [
            Some((date!(2024 - 03 - 24), 5)),
            Some((date!(2024 - 03 - 26), 4)),
            None,
            None,
            None,
        ],
    },
    SeedItem {
        sequence: 3,
        name: "홍보용 텀블러",
        client: "LG전자",
        quantity: 350,
        print_type: PrintType::Laser,
        delivery_method: DeliveryMethod::Courier,
        manager_id: 5,
        plan: [
            Some((date!(2024 - 03 - 26), 5)),
            Some((date!(2024 - 03 - 27), 4)),
            Some((date!(2024 - 03 - 28), 4)),
            None,
            None,
        ],
    },
];

/// Builds the three demonstration items `P001` through `P003`.
///
/// `P001` is fully shipped, `P002` has print approval, `P003` is printing.
///
/// # Errors
///
/// Returns `DomainError::StaffNotFound` if `directory` lacks any referenced staff id.
pub fn seed_items(directory: &StaffDirectory) -> Result<Vec<Item>, DomainError> {
    SEED.iter().map(|seed| build(seed, directory)).collect()
}

fn build(seed: &SeedItem, directory: &StaffDirectory) -> Result<Item, DomainError> {
    let mut stages: [StageRecord; STAGE_COUNT] = StageName::ALL.map(StageRecord::pending);
    for (record, planned) in stages.iter_mut().zip(seed.plan.iter()) {
        if let Some((on, staff_id)) = planned {
            let by: StaffMember = directory.require(*staff_id)?.clone();
            *record = StageRecord::completed(record.stage, *on, by);
        }
    }
    Ok(Item {
        id: ItemId::from_sequence(seed.sequence),
        name: seed.name.to_string(),
        client: seed.client.to_string(),
        quantity: seed.quantity,
        print_type: seed.print_type,
        delivery_method: seed.delivery_method,
        manager: directory.require(seed.manager_id)?.clone(),
        stages,
    })
}
