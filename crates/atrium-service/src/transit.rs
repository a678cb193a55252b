//! Elevator and passage management.
//!
//! Elevators and passages are placed when a floor is laid out, before
//! rooms arrive; only room creation runs the full area checker, which
//! then treats these footprints as occupied ground.

use atrium_domain::{
    DomainError, DomainResult, Elevator, ElevatorId, ElevatorRepo,
    FacilityStore, Floor, FloorId, FloorRepo, Passage, PassageId,
    PassageRepo, Position, RoomDimensions,
};

/// Raw payload for creating an elevator.
#[derive(Debug, Clone)]
pub struct NewElevator {
    /// Floors the elevator stops at. Must name at least one.
    pub floor_ids: Vec<String>,
    pub initial_x: i64,
    pub initial_y: i64,
    pub final_x: i64,
    pub final_y: i64,
    pub domain_id: Option<String>,
}

/// Raw payload for creating a passage between two floors.
#[derive(Debug, Clone)]
pub struct NewPassage {
    pub from_floor_id: String,
    pub to_floor_id: String,
    pub from_initial_x: i64,
    pub from_initial_y: i64,
    pub from_final_x: i64,
    pub from_final_y: i64,
    pub to_initial_x: i64,
    pub to_initial_y: i64,
    pub to_final_x: i64,
    pub to_final_y: i64,
    pub domain_id: Option<String>,
}

/// Creates and lists elevators and passages.
#[derive(Clone)]
pub struct TransitService<S> {
    store: S,
}

impl<S: FacilityStore> TransitService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates and persists a new elevator.
    ///
    /// Every served floor must exist and the shaft footprint must fit
    /// within each floor's bounds.
    pub async fn create_elevator(&self, input: NewElevator) -> DomainResult<Elevator> {
        if input.floor_ids.is_empty() {
            return Err(DomainError::invalid(
                "an elevator must serve at least one floor",
            ));
        }

        let area = parse_area(
            input.initial_x,
            input.initial_y,
            input.final_x,
            input.final_y,
        )?;

        let mut floors = Vec::with_capacity(input.floor_ids.len());
        for raw in &input.floor_ids {
            let floor = self.resolve_floor(raw).await?;
            ensure_fits(&floor, &area)?;
            floors.push(floor.id());
        }

        let id = match &input.domain_id {
            Some(raw) => ElevatorId::parse(raw)?,
            None => ElevatorId::new(),
        };
        if ElevatorRepo::find_by_id(&self.store, &id).await?.is_some() {
            return Err(DomainError::already_exists("elevator", "id"));
        }

        let elevator = Elevator::new(id, floors, area);
        ElevatorRepo::save(&self.store, &elevator).await?;
        tracing::info!(
            elevator = %elevator.id(),
            floors = elevator.floors().len(),
            "elevator created"
        );
        Ok(elevator)
    }

    pub async fn list_elevators(&self) -> DomainResult<Vec<Elevator>> {
        ElevatorRepo::find_all(&self.store).await
    }

    /// Validates and persists a new passage.
    ///
    /// The two floors must be distinct and both must exist; each
    /// footprint must fit its floor.
    pub async fn create_passage(&self, input: NewPassage) -> DomainResult<Passage> {
        if input.from_floor_id.trim() == input.to_floor_id.trim() {
            return Err(DomainError::invalid(
                "a passage must connect two different floors",
            ));
        }

        let from_floor = self.resolve_floor(&input.from_floor_id).await?;
        let to_floor = self.resolve_floor(&input.to_floor_id).await?;

        let from_area = parse_area(
            input.from_initial_x,
            input.from_initial_y,
            input.from_final_x,
            input.from_final_y,
        )?;
        let to_area = parse_area(
            input.to_initial_x,
            input.to_initial_y,
            input.to_final_x,
            input.to_final_y,
        )?;
        ensure_fits(&from_floor, &from_area)?;
        ensure_fits(&to_floor, &to_area)?;

        let id = match &input.domain_id {
            Some(raw) => PassageId::parse(raw)?,
            None => PassageId::new(),
        };
        if PassageRepo::find_by_id(&self.store, &id).await?.is_some() {
            return Err(DomainError::already_exists("passage", "id"));
        }

        let passage = Passage::new(
            id,
            from_floor.id(),
            to_floor.id(),
            from_area,
            to_area,
        );
        PassageRepo::save(&self.store, &passage).await?;
        tracing::info!(
            passage = %passage.id(),
            from = %passage.from_floor(),
            to = %passage.to_floor(),
            "passage created"
        );
        Ok(passage)
    }

    pub async fn list_passages(&self) -> DomainResult<Vec<Passage>> {
        PassageRepo::find_all(&self.store).await
    }

    async fn resolve_floor(&self, raw: &str) -> DomainResult<Floor> {
        let id = FloorId::parse(raw)?;
        FloorRepo::find_by_id(&self.store, &id)
            .await?
            .ok_or_else(|| DomainError::not_found("floor", raw.to_string()))
    }
}

fn parse_area(
    initial_x: i64,
    initial_y: i64,
    final_x: i64,
    final_y: i64,
) -> DomainResult<RoomDimensions> {
    let initial = Position::try_new(initial_x, initial_y)?;
    let final_position = Position::try_new(final_x, final_y)?;
    RoomDimensions::try_new(initial, final_position)
}

fn ensure_fits(floor: &Floor, area: &RoomDimensions) -> DomainResult<()> {
    if !floor.bounds().contains_area(area) {
        return Err(DomainError::invalid(format!(
            "the area {area} does not fit within floor {} bounds {}",
            floor.id(),
            floor.bounds()
        )));
    }
    Ok(())
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_domain::{
        Building, BuildingCode, BuildingId, BuildingRepo, FloorBounds,
        ValidationConfig,
    };
    use atrium_store::MemoryStore;

    async fn seed_floor(store: &MemoryStore, number: i32) -> FloorId {
        let config = ValidationConfig::default();
        let building = Building::new(
            BuildingId::new(),
            BuildingCode::parse(&format!("B{number}"), &config).unwrap(),
            None,
            None,
        );
        BuildingRepo::save(store, &building).await.unwrap();

        let floor = Floor::new(
            FloorId::new(),
            building.id(),
            number,
            None,
            FloorBounds::try_new(10, 10).unwrap(),
        );
        FloorRepo::save(store, &floor).await.unwrap();
        floor.id()
    }

    fn elevator_input(floors: &[FloorId]) -> NewElevator {
        NewElevator {
            floor_ids: floors.iter().map(|f| f.to_string()).collect(),
            initial_x: 4,
            initial_y: 4,
            final_x: 5,
            final_y: 5,
            domain_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_elevator_across_floors() {
        let store = MemoryStore::new();
        let f1 = seed_floor(&store, 1).await;
        let f2 = seed_floor(&store, 2).await;
        let service = TransitService::new(store);

        let elevator = service
            .create_elevator(elevator_input(&[f1, f2]))
            .await
            .unwrap();
        assert!(elevator.serves(&f1));
        assert!(elevator.serves(&f2));
        assert_eq!(service.list_elevators().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_elevator_requires_floors() {
        let store = MemoryStore::new();
        let service = TransitService::new(store);

        let err = service
            .create_elevator(elevator_input(&[]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("at least one floor"));
    }

    #[tokio::test]
    async fn test_elevator_unknown_floor_is_not_found() {
        let store = MemoryStore::new();
        let service = TransitService::new(store);

        let err = service
            .create_elevator(elevator_input(&[FloorId::new()]))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "floor", .. }));
    }

    #[tokio::test]
    async fn test_elevator_shaft_must_fit_the_floor() {
        let store = MemoryStore::new();
        let floor = seed_floor(&store, 1).await;
        let service = TransitService::new(store);

        let mut input = elevator_input(&[floor]);
        input.final_x = 12;
        let err = service.create_elevator(input).await.unwrap_err();
        assert!(err.to_string().contains("does not fit"));
    }

    #[tokio::test]
    async fn test_create_passage_between_two_floors() {
        let store = MemoryStore::new();
        let f1 = seed_floor(&store, 1).await;
        let f2 = seed_floor(&store, 2).await;
        let service = TransitService::new(store);

        let passage = service
            .create_passage(NewPassage {
                from_floor_id: f1.to_string(),
                to_floor_id: f2.to_string(),
                from_initial_x: 0,
                from_initial_y: 0,
                from_final_x: 1,
                from_final_y: 1,
                to_initial_x: 8,
                to_initial_y: 8,
                to_final_x: 9,
                to_final_y: 9,
                domain_id: None,
            })
            .await
            .unwrap();
        assert_eq!(passage.from_floor(), f1);
        assert_eq!(passage.to_floor(), f2);
        assert_eq!(service.list_passages().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_passage_rejects_same_floor_twice() {
        let store = MemoryStore::new();
        let floor = seed_floor(&store, 1).await;
        let service = TransitService::new(store);

        let err = service
            .create_passage(NewPassage {
                from_floor_id: floor.to_string(),
                to_floor_id: floor.to_string(),
                from_initial_x: 0,
                from_initial_y: 0,
                from_final_x: 1,
                from_final_y: 1,
                to_initial_x: 8,
                to_initial_y: 8,
                to_final_x: 9,
                to_final_y: 9,
                domain_id: None,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("two different floors"));
    }
}
