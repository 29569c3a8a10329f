//! Appointment booking and rescheduling.
//!
//! Validation always completes before the first mutating statement: pet,
//! clinic, then every requested service individually, so a failure names the
//! offending service id and leaves no partial rows behind.

use crate::{front::errors::ApiError, models, repo};

pub async fn list_appointments(
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::appointment::Appointment>, ApiError> {
    Ok(repo.list_appointments().await?)
}

pub async fn get_appointment(
    appointment_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<models::appointment::Appointment, ApiError> {
    repo.get_appointment(appointment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Appointment not found".into()))
}

pub async fn list_pet_appointments(
    pet_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::appointment::Appointment>, ApiError> {
    if !repo.pet_exists(pet_id).await? {
        return Err(ApiError::NotFound("Pet not found".into()));
    }

    Ok(repo.list_pet_appointments(pet_id).await?)
}

pub async fn list_clinic_appointments(
    clinic_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::appointment::Appointment>, ApiError> {
    if !repo.clinic_exists(clinic_id).await? {
        return Err(ApiError::NotFound("Clinic not found".into()));
    }

    Ok(repo.list_clinic_appointments(clinic_id).await?)
}

pub async fn list_user_appointments(
    user_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::appointment::Appointment>, ApiError> {
    Ok(repo.list_user_appointments(user_id).await?)
}

async fn check_services_belong_to_clinic(
    services: &[i64],
    clinic_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    for service_id in services {
        if !repo
            .service_belongs_to_clinic(*service_id, clinic_id)
            .await?
        {
            return Err(ApiError::Validation(format!(
                "Invalid service ID: {}",
                service_id
            )));
        }
    }

    Ok(())
}

pub async fn create_appointment(
    request: models::appointment::NewAppointment,
    repo: &repo::ImplAppRepo,
) -> Result<i64, ApiError> {
    if request.services.is_empty() {
        return Err(ApiError::Validation("Missing required fields".into()));
    }

    if !repo.pet_exists(request.pet_id).await? {
        return Err(ApiError::NotFound("Pet not found".into()));
    }

    if !repo.clinic_exists(request.clinic_id).await? {
        return Err(ApiError::NotFound("Clinic not found".into()));
    }

    check_services_belong_to_clinic(&request.services, request.clinic_id, repo).await?;

    Ok(repo.insert_appointment(request).await?)
}

/// Read-modify-merge: unspecified fields keep the stored values. A supplied
/// service list is validated against the effective clinic (which may itself
/// have just changed) and then replaces the join rows entirely.
pub async fn update_appointment(
    request: models::appointment::AppointmentUpdate,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    let mut appointment = repo
        .get_appointment_row(request.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Appointment not found".into()))?;

    if let Some(pet_id) = request.pet_id {
        if !repo.pet_exists(pet_id).await? {
            return Err(ApiError::NotFound("Pet not found".into()));
        }
        appointment.pet_id = pet_id;
    }

    if let Some(clinic_id) = request.clinic_id {
        if !repo.clinic_exists(clinic_id).await? {
            return Err(ApiError::NotFound("Clinic not found".into()));
        }
        appointment.clinic_id = clinic_id;
    }

    if let Some(appointment_date) = request.appointment_date {
        appointment.appointment_date = appointment_date;
    }
    if let Some(appointment_time) = request.appointment_time {
        appointment.appointment_time = appointment_time;
    }
    if let Some(reason) = request.reason {
        appointment.reason = reason;
    }
    if let Some(status) = &request.status {
        appointment.status = status.parse().map_err(|_| {
            ApiError::Validation(
                "Invalid status. Must be one of: scheduled, completed, cancelled".into(),
            )
        })?;
    }
    if let Some(notes) = request.notes {
        appointment.notes = notes;
    }

    if let Some(services) = &request.services {
        check_services_belong_to_clinic(services, appointment.clinic_id, repo).await?;
    }

    Ok(repo.update_appointment(appointment, request.services).await?)
}

pub async fn delete_appointment(
    appointment_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    if !repo.appointment_exists(appointment_id).await? {
        return Err(ApiError::NotFound("Appointment not found".into()));
    }

    Ok(repo.delete_appointment(appointment_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::{Appointment, AppointmentStatus, NewAppointment};
    use crate::repo::MockAppRepo;
    use chrono::{NaiveDate, NaiveTime};
    use mockall::predicate::*;

    fn new_appointment_fixture() -> NewAppointment {
        NewAppointment {
            pet_id: 1,
            clinic_id: 2,
            appointment_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            appointment_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            reason: Some("yearly checkup".to_string()),
            services: vec![4, 5],
        }
    }

    fn stored_appointment(id: i64) -> Appointment {
        Appointment {
            id,
            pet_id: 1,
            clinic_id: 2,
            appointment_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            appointment_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            reason: Some("yearly checkup".to_string()),
            status: AppointmentStatus::Scheduled,
            notes: None,
            ..Default::default()
        }
    }

    #[ntex::test]
    async fn test_create_appointment_inserts_row_and_services() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_pet_exists()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));
        mock_repo
            .expect_clinic_exists()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(true));
        mock_repo
            .expect_service_belongs_to_clinic()
            .times(2)
            .returning(|_, _| Ok(true));
        mock_repo
            .expect_insert_appointment()
            .withf(|request| request.services == vec![4, 5])
            .times(1)
            .returning(|_| Ok(21));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = create_appointment(new_appointment_fixture(), &mock_repo).await;

        assert!(result.is_ok_and(|id| id == 21));
    }

    #[ntex::test]
    async fn test_create_appointment_without_services_is_invalid() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let request = NewAppointment {
            services: vec![],
            ..new_appointment_fixture()
        };
        let result = create_appointment(request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_create_appointment_foreign_service_names_offender_and_skips_insert() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_pet_exists().returning(|_| Ok(true));
        mock_repo.expect_clinic_exists().returning(|_| Ok(true));
        mock_repo
            .expect_service_belongs_to_clinic()
            .with(eq(4), eq(2))
            .times(1)
            .returning(|_, _| Ok(false));
        // no insert expectation: a call would panic the test

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = create_appointment(new_appointment_fixture(), &mock_repo).await;

        match result {
            Err(ApiError::Validation(message)) => {
                assert_eq!(message, "Invalid service ID: 4");
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[ntex::test]
    async fn test_create_appointment_unknown_clinic_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_pet_exists().returning(|_| Ok(true));
        mock_repo
            .expect_clinic_exists()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(false));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = create_appointment(new_appointment_fixture(), &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_update_merges_unspecified_fields_from_stored_row() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_appointment_row()
            .with(eq(21))
            .times(1)
            .returning(|id| Ok(Some(stored_appointment(id))));
        mock_repo
            .expect_update_appointment()
            .withf(|merged, services| {
                merged.pet_id == 1
                    && merged.clinic_id == 2
                    && merged.status == AppointmentStatus::Completed
                    && merged.notes.as_deref() == Some("all done")
                    && merged.reason.as_deref() == Some("yearly checkup")
                    && services.is_none()
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = models::appointment::AppointmentUpdate {
            id: 21,
            status: Some("completed".to_string()),
            notes: Some(Some("all done".to_string())),
            ..Default::default()
        };

        assert!(update_appointment(request, &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_update_validates_services_against_new_clinic() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_appointment_row()
            .returning(|id| Ok(Some(stored_appointment(id))));
        mock_repo
            .expect_clinic_exists()
            .with(eq(9))
            .times(1)
            .returning(|_| Ok(true));
        mock_repo
            .expect_service_belongs_to_clinic()
            .with(eq(4), eq(9))
            .times(1)
            .returning(|_, _| Ok(false));
        // no update expectation: a call would panic the test

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = models::appointment::AppointmentUpdate {
            id: 21,
            clinic_id: Some(9),
            services: Some(vec![4]),
            ..Default::default()
        };
        let result = update_appointment(request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_update_replaces_service_set_entirely() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_appointment_row()
            .returning(|id| Ok(Some(stored_appointment(id))));
        mock_repo
            .expect_service_belongs_to_clinic()
            .with(eq(6), eq(2))
            .times(1)
            .returning(|_, _| Ok(true));
        mock_repo
            .expect_update_appointment()
            .withf(|_, services| services.as_deref() == Some(&[6][..]))
            .times(1)
            .returning(|_, _| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = models::appointment::AppointmentUpdate {
            id: 21,
            services: Some(vec![6]),
            ..Default::default()
        };

        assert!(update_appointment(request, &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_update_unknown_appointment_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_appointment_row()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(None));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = models::appointment::AppointmentUpdate {
            id: 99,
            ..Default::default()
        };
        let result = update_appointment(request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_delete_short_circuits_on_missing_appointment() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_appointment_exists()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(false));
        // no delete expectation: a call would panic the test

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = delete_appointment(99, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_delete_removes_existing_appointment() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_appointment_exists()
            .with(eq(21))
            .times(1)
            .returning(|_| Ok(true));
        mock_repo
            .expect_delete_appointment()
            .with(eq(21))
            .times(1)
            .returning(|_| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        assert!(delete_appointment(21, &mock_repo).await.is_ok());
    }
}
