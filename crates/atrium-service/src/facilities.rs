//! Building and floor management.

use atrium_domain::{
    Building, BuildingCode, BuildingDescription, BuildingId, BuildingName,
    BuildingRepo, DomainError, DomainResult, FacilityStore, Floor,
    FloorBounds, FloorDescription, FloorId, FloorRepo, ValidationConfig,
};

/// Raw payload for creating a building.
#[derive(Debug, Clone)]
pub struct NewBuilding {
    pub code: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub domain_id: Option<String>,
}

/// Raw payload for creating a floor.
#[derive(Debug, Clone)]
pub struct NewFloor {
    pub building_id: String,
    pub number: i32,
    pub description: Option<String>,
    pub width: i64,
    pub length: i64,
    pub domain_id: Option<String>,
}

/// Creates and lists buildings.
#[derive(Clone)]
pub struct BuildingService<S> {
    store: S,
    config: ValidationConfig,
}

impl<S: FacilityStore> BuildingService<S> {
    pub fn new(store: S, config: ValidationConfig) -> Self {
        Self { store, config }
    }

    pub async fn create_building(&self, input: NewBuilding) -> DomainResult<Building> {
        let code = BuildingCode::parse(&input.code, &self.config)?;
        let name = input
            .name
            .as_deref()
            .map(|raw| BuildingName::parse(raw, &self.config))
            .transpose()?;
        let description = input
            .description
            .as_deref()
            .map(|raw| BuildingDescription::parse(raw, &self.config))
            .transpose()?;

        if BuildingRepo::find_by_code(&self.store, &code)
            .await?
            .is_some()
        {
            return Err(DomainError::already_exists("building", "code"));
        }

        let id = match &input.domain_id {
            Some(raw) => BuildingId::parse(raw)?,
            None => BuildingId::new(),
        };
        if BuildingRepo::find_by_id(&self.store, &id).await?.is_some() {
            return Err(DomainError::already_exists("building", "id"));
        }

        let building = Building::new(id, code, name, description);
        BuildingRepo::save(&self.store, &building).await?;
        tracing::info!(
            building = %building.id(),
            code = %building.code(),
            "building created"
        );
        Ok(building)
    }

    pub async fn list_buildings(&self) -> DomainResult<Vec<Building>> {
        BuildingRepo::find_all(&self.store).await
    }
}

/// Creates and lists floors.
#[derive(Clone)]
pub struct FloorService<S> {
    store: S,
    config: ValidationConfig,
}

impl<S: FacilityStore> FloorService<S> {
    pub fn new(store: S, config: ValidationConfig) -> Self {
        Self { store, config }
    }

    /// Validates and persists a new floor.
    ///
    /// The owning building must exist, and the floor number must be
    /// unique within it.
    pub async fn create_floor(&self, input: NewFloor) -> DomainResult<Floor> {
        let building_id = BuildingId::parse(&input.building_id)?;
        if BuildingRepo::find_by_id(&self.store, &building_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found(
                "building",
                input.building_id.clone(),
            ));
        }

        let bounds = FloorBounds::try_new(input.width, input.length)?;
        let description = input
            .description
            .as_deref()
            .map(|raw| FloorDescription::parse(raw, &self.config))
            .transpose()?;

        let siblings = self.store.find_by_building(&building_id).await?;
        if siblings.iter().any(|f| f.number() == input.number) {
            return Err(DomainError::already_exists("floor", "number"));
        }

        let id = match &input.domain_id {
            Some(raw) => FloorId::parse(raw)?,
            None => FloorId::new(),
        };
        if FloorRepo::find_by_id(&self.store, &id).await?.is_some() {
            return Err(DomainError::already_exists("floor", "id"));
        }

        let floor = Floor::new(id, building_id, input.number, description, bounds);
        FloorRepo::save(&self.store, &floor).await?;
        tracing::info!(
            floor = %floor.id(),
            building = %building_id,
            number = floor.number(),
            "floor created"
        );
        Ok(floor)
    }

    /// Lists all floors, or only those of one building.
    pub async fn list_floors(
        &self,
        building: Option<BuildingId>,
    ) -> DomainResult<Vec<Floor>> {
        match building {
            Some(building) => self.store.find_by_building(&building).await,
            None => FloorRepo::find_all(&self.store).await,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
