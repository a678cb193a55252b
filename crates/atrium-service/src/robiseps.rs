//! Robisep fleet management.

use atrium_domain::{
    DomainError, DomainResult, FacilityStore, Robisep, RobisepCode,
    RobisepDescription, RobisepId, RobisepNickname, RobisepRepo,
    RobisepSerial, RoomId, RoomRepo, ValidationConfig,
};

/// Raw payload for registering a robisep.
#[derive(Debug, Clone)]
pub struct NewRobisep {
    pub code: String,
    pub nickname: String,
    pub serial_number: String,
    pub description: Option<String>,
    /// The room the robisep is assigned to.
    pub room_id: String,
    pub domain_id: Option<String>,
}

/// Registers, lists, and disables robiseps.
#[derive(Clone)]
pub struct RobisepService<S> {
    store: S,
    config: ValidationConfig,
}

impl<S: FacilityStore> RobisepService<S> {
    pub fn new(store: S, config: ValidationConfig) -> Self {
        Self { store, config }
    }

    /// Validates and persists a new robisep.
    ///
    /// The assigned room must exist; the code and the serial number
    /// must be unique across the fleet.
    pub async fn create_robisep(&self, input: NewRobisep) -> DomainResult<Robisep> {
        let code = RobisepCode::parse(&input.code, &self.config)?;
        let nickname = RobisepNickname::parse(&input.nickname, &self.config)?;
        let serial = RobisepSerial::parse(&input.serial_number, &self.config)?;
        let description = input
            .description
            .as_deref()
            .map(|raw| RobisepDescription::parse(raw, &self.config))
            .transpose()?;

        let room_id = RoomId::parse(&input.room_id)?;
        if RoomRepo::find_by_id(&self.store, &room_id).await?.is_none() {
            return Err(DomainError::not_found("room", input.room_id.clone()));
        }

        if RobisepRepo::find_by_code(&self.store, &code)
            .await?
            .is_some()
        {
            return Err(DomainError::already_exists("robisep", "code"));
        }
        if self.store.find_by_serial(&serial).await?.is_some() {
            return Err(DomainError::already_exists(
                "robisep",
                "serial number",
            ));
        }

        let id = match &input.domain_id {
            Some(raw) => RobisepId::parse(raw)?,
            None => RobisepId::new(),
        };
        if RobisepRepo::find_by_id(&self.store, &id).await?.is_some() {
            return Err(DomainError::already_exists("robisep", "id"));
        }

        let robisep =
            Robisep::new(id, code, nickname, serial, description, room_id);
        RobisepRepo::save(&self.store, &robisep).await?;
        tracing::info!(
            robisep = %robisep.id(),
            code = %robisep.code(),
            room = %robisep.room_id(),
            "robisep registered"
        );
        Ok(robisep)
    }

    pub async fn list_robiseps(&self) -> DomainResult<Vec<Robisep>> {
        RobisepRepo::find_all(&self.store).await
    }

    /// Takes a robisep out of service. Disabling twice is rejected.
    pub async fn disable_robisep(&self, raw_id: &str) -> DomainResult<Robisep> {
        let id = RobisepId::parse(raw_id)?;
        let mut robisep = RobisepRepo::find_by_id(&self.store, &id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found("robisep", raw_id.to_string())
            })?;

        robisep.disable()?;
        RobisepRepo::save(&self.store, &robisep).await?;
        tracing::info!(robisep = %robisep.id(), "robisep disabled");
        Ok(robisep)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_domain::{
        DoorOrientation, Position, Room, RoomCategory, RoomDescription,
        RoomDimensions, RoomName,
    };
    use atrium_store::MemoryStore;

    async fn seed_room(store: &MemoryStore) -> RoomId {
        let config = ValidationConfig::default();
        let area = RoomDimensions::try_new(
            Position::try_new(0, 0).unwrap(),
            Position::try_new(4, 4).unwrap(),
        )
        .unwrap();
        let room = Room::new(
            RoomId::new(),
            RoomName::parse("Dock", &config).unwrap(),
            RoomDescription::parse("charging dock", &config).unwrap(),
            RoomCategory::Other,
            area,
            Position::try_new(2, 4).unwrap(),
            DoorOrientation::South,
            atrium_domain::FloorId::new(),
        );
        RoomRepo::save(store, &room).await.unwrap();
        room.id()
    }

    fn input(room_id: &RoomId, code: &str, serial: &str) -> NewRobisep {
        NewRobisep {
            code: code.into(),
            nickname: "Scout".into(),
            serial_number: serial.into(),
            description: None,
            room_id: room_id.to_string(),
            domain_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_robisep_in_existing_room() {
        let store = MemoryStore::new();
        let room_id = seed_room(&store).await;
        let service =
            RobisepService::new(store, ValidationConfig::default());

        let robisep = service
            .create_robisep(input(&room_id, "RB01", "SN100"))
            .await
            .unwrap();
        assert!(robisep.is_enabled());
        assert_eq!(robisep.room_id(), room_id);
        assert_eq!(service.list_robiseps().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_room_is_not_found() {
        let store = MemoryStore::new();
        let service =
            RobisepService::new(store, ValidationConfig::default());

        let err = service
            .create_robisep(input(&RoomId::new(), "RB01", "SN100"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "room", .. }));
    }

    #[tokio::test]
    async fn test_code_and_serial_must_be_unique() {
        let store = MemoryStore::new();
        let room_id = seed_room(&store).await;
        let service =
            RobisepService::new(store, ValidationConfig::default());

        service
            .create_robisep(input(&room_id, "RB01", "SN100"))
            .await
            .unwrap();

        let err = service
            .create_robisep(input(&room_id, "RB01", "SN200"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::already_exists("robisep", "code"));

        let err = service
            .create_robisep(input(&room_id, "RB02", "SN100"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::already_exists("robisep", "serial number")
        );
    }

    #[tokio::test]
    async fn test_disable_then_disable_again_fails() {
        let store = MemoryStore::new();
        let room_id = seed_room(&store).await;
        let service =
            RobisepService::new(store, ValidationConfig::default());

        let robisep = service
            .create_robisep(input(&room_id, "RB01", "SN100"))
            .await
            .unwrap();

        let disabled = service
            .disable_robisep(&robisep.id().to_string())
            .await
            .unwrap();
        assert!(!disabled.is_enabled());

        let err = service
            .disable_robisep(&robisep.id().to_string())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("already disabled"));
    }

    #[tokio::test]
    async fn test_disable_unknown_robisep_is_not_found() {
        let store = MemoryStore::new();
        let service =
            RobisepService::new(store, ValidationConfig::default());

        let err = service
            .disable_robisep(&RobisepId::new().to_string())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound { entity: "robisep", .. }
        ));
    }
}
