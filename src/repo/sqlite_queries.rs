// users / sessions

pub const QUERY_GET_USER_BY_EMAIL: &str = r#"
SELECT
    id,name,email,password_hash,phone,role,created_at
FROM users
WHERE email=$1;
"#;

pub const QUERY_GET_USER_BY_ID: &str = r#"
SELECT
    id,name,email,phone,role,created_at
FROM users
WHERE id=$1;
"#;

pub const QUERY_LIST_USERS: &str = r#"
SELECT
    id,name,email,phone,role,created_at
FROM users
ORDER BY id;
"#;

pub const QUERY_USER_EMAIL_TAKEN: &str = r#"
SELECT EXISTS(
    SELECT 1 FROM users
    WHERE email = $1 AND ($2 IS NULL OR id != $2)
);
"#;

pub const QUERY_USER_EXISTS: &str = r#"SELECT EXISTS(SELECT 1 FROM users WHERE id=$1);"#;

pub const QUERY_INSERT_USER: &str = r#"
INSERT INTO users(
    name,email,password_hash,phone,role,created_at
) VALUES($1,$2,$3,$4,$5,$6);
"#;

pub const QUERY_SEED_ADMIN: &str = r#"
INSERT INTO users(name,email,password_hash,phone,role,created_at)
VALUES($1,$2,$3,NULL,'admin',$4)
ON CONFLICT(email) DO NOTHING;
"#;

pub const QUERY_DELETE_USER: &str = r#"DELETE FROM users WHERE id=$1;"#;

pub const QUERY_INSERT_SESSION: &str = r#"
INSERT INTO sessions(token,user_id,created_at,expires_at) VALUES($1,$2,$3,$4);
"#;

pub const QUERY_GET_SESSION_USER: &str = r#"
SELECT
    u.id,u.name,u.email,u.phone,u.role,u.created_at
FROM sessions AS s
INNER JOIN users AS u ON (u.id = s.user_id)
WHERE s.token = $1 AND s.expires_at > $2;
"#;

pub const QUERY_DELETE_SESSION: &str = r#"DELETE FROM sessions WHERE token=$1;"#;

// pet categories

pub const QUERY_LIST_CATEGORIES: &str = r#"
SELECT id,name,description FROM pet_categories ORDER BY id;
"#;

pub const QUERY_GET_CATEGORY: &str = r#"
SELECT id,name,description FROM pet_categories WHERE id=$1;
"#;

pub const QUERY_CATEGORY_NAME_TAKEN: &str = r#"
SELECT EXISTS(
    SELECT 1 FROM pet_categories
    WHERE name = $1 AND ($2 IS NULL OR id != $2)
);
"#;

pub const QUERY_INSERT_CATEGORY: &str = r#"
INSERT INTO pet_categories(name,description) VALUES($1,$2);
"#;

pub const QUERY_DELETE_CATEGORY: &str = r#"DELETE FROM pet_categories WHERE id=$1;"#;

pub const QUERY_CATEGORY_PET_COUNT: &str = r#"
SELECT COUNT(*) FROM pets WHERE category_id=$1;
"#;

// pets

pub const QUERY_LIST_PETS: &str = r#"
SELECT
    p.id,p.name,p.category_id,p.breed,p.age,p.gender,p.size,p.color,
    p.description,p.medical_history,p.is_available,p.image_url,p.owner_id,
    p.created_at,c.name AS category_name
FROM pets AS p
LEFT JOIN pet_categories AS c ON (p.category_id = c.id)
ORDER BY p.id;
"#;

pub const QUERY_LIST_PETS_BY_CATEGORY: &str = r#"
SELECT
    p.id,p.name,p.category_id,p.breed,p.age,p.gender,p.size,p.color,
    p.description,p.medical_history,p.is_available,p.image_url,p.owner_id,
    p.created_at,c.name AS category_name
FROM pets AS p
LEFT JOIN pet_categories AS c ON (p.category_id = c.id)
WHERE c.name = $1
ORDER BY p.id;
"#;

pub const QUERY_GET_PET: &str = r#"
SELECT
    p.id,p.name,p.category_id,p.breed,p.age,p.gender,p.size,p.color,
    p.description,p.medical_history,p.is_available,p.image_url,p.owner_id,
    p.created_at,c.name AS category_name
FROM pets AS p
LEFT JOIN pet_categories AS c ON (p.category_id = c.id)
WHERE p.id = $1;
"#;

pub const QUERY_PET_EXISTS: &str = r#"SELECT EXISTS(SELECT 1 FROM pets WHERE id=$1);"#;

pub const QUERY_PET_AVAILABILITY: &str = r#"SELECT is_available FROM pets WHERE id=$1;"#;

pub const QUERY_INSERT_PET: &str = r#"
INSERT INTO pets (
    name,category_id,breed,age,gender,size,color,
    description,medical_history,is_available,image_url,owner_id,created_at
) VALUES(
    $1,$2,$3,$4,$5,$6,$7,
    $8,$9,$10,$11,$12,$13
);
"#;

pub const QUERY_DELETE_PET: &str = r#"DELETE FROM pets WHERE id=$1;"#;

// adoption requests

pub const QUERY_LIST_ADOPTIONS: &str = r#"
SELECT
    ar.id,ar.pet_id,ar.user_id,ar.reason,ar.status,ar.created_at,
    p.name AS pet_name,p.breed,p.gender,
    u.name AS user_name,u.email AS user_email
FROM adoption_requests AS ar
INNER JOIN pets AS p ON (ar.pet_id = p.id)
INNER JOIN users AS u ON (ar.user_id = u.id)
ORDER BY ar.created_at DESC;
"#;

pub const QUERY_GET_ADOPTION: &str = r#"
SELECT
    ar.id,ar.pet_id,ar.user_id,ar.reason,ar.status,ar.created_at,
    p.name AS pet_name,p.breed,p.gender,
    u.name AS user_name,u.email AS user_email
FROM adoption_requests AS ar
INNER JOIN pets AS p ON (ar.pet_id = p.id)
INNER JOIN users AS u ON (ar.user_id = u.id)
WHERE ar.id = $1;
"#;

pub const QUERY_LIST_USER_ADOPTIONS: &str = r#"
SELECT
    ar.id,ar.pet_id,ar.user_id,ar.reason,ar.status,ar.created_at,
    p.name AS pet_name,p.breed,p.gender,p.image_url
FROM adoption_requests AS ar
INNER JOIN pets AS p ON (ar.pet_id = p.id)
WHERE ar.user_id = $1
ORDER BY ar.created_at DESC;
"#;

pub const QUERY_LIST_PET_ADOPTIONS: &str = r#"
SELECT
    ar.id,ar.pet_id,ar.user_id,ar.reason,ar.status,ar.created_at,
    u.name AS user_name,u.email AS user_email,u.phone AS user_phone
FROM adoption_requests AS ar
INNER JOIN users AS u ON (ar.user_id = u.id)
WHERE ar.pet_id = $1
ORDER BY ar.created_at DESC;
"#;

pub const QUERY_HAS_PENDING_REQUEST: &str = r#"
SELECT EXISTS(
    SELECT 1 FROM adoption_requests
    WHERE pet_id = $1 AND user_id = $2 AND status = 'pending'
);
"#;

pub const QUERY_INSERT_ADOPTION: &str = r#"
INSERT INTO adoption_requests(pet_id,user_id,reason,status,created_at)
VALUES($1,$2,$3,$4,$5);
"#;

pub const QUERY_GET_ADOPTION_SUMMARY: &str = r#"
SELECT id,pet_id,status FROM adoption_requests WHERE id=$1;
"#;

pub const QUERY_SET_ADOPTION_STATUS: &str = r#"
UPDATE adoption_requests SET status=$2 WHERE id=$1;
"#;

pub const QUERY_SET_PET_UNAVAILABLE: &str = r#"
UPDATE pets SET is_available=0 WHERE id=$1;
"#;

pub const QUERY_REJECT_OTHER_PENDING: &str = r#"
UPDATE adoption_requests SET status='rejected'
WHERE pet_id = $1 AND id != $2 AND status = 'pending';
"#;

pub const QUERY_DELETE_ADOPTION: &str = r#"DELETE FROM adoption_requests WHERE id=$1;"#;

// vet clinics

pub const QUERY_LIST_CLINICS: &str = r#"
SELECT
    id,name,address,phone,email,description,image,created_at
FROM vet_clinics
ORDER BY name ASC;
"#;

pub const QUERY_GET_CLINIC: &str = r#"
SELECT
    id,name,address,phone,email,description,image,created_at
FROM vet_clinics
WHERE id = $1;
"#;

pub const QUERY_CLINIC_EXISTS: &str = r#"SELECT EXISTS(SELECT 1 FROM vet_clinics WHERE id=$1);"#;

pub const QUERY_CLINIC_NAME_TAKEN: &str = r#"
SELECT EXISTS(
    SELECT 1 FROM vet_clinics
    WHERE name = $1 AND ($2 IS NULL OR id != $2)
);
"#;

pub const QUERY_GET_CLINIC_HOURS: &str = r#"
SELECT day,open_time,close_time
FROM clinic_hours
WHERE clinic_id = $1
ORDER BY CASE day
    WHEN 'Monday' THEN 1
    WHEN 'Tuesday' THEN 2
    WHEN 'Wednesday' THEN 3
    WHEN 'Thursday' THEN 4
    WHEN 'Friday' THEN 5
    WHEN 'Saturday' THEN 6
    WHEN 'Sunday' THEN 7
    ELSE 8
END;
"#;

pub const QUERY_GET_CLINIC_SERVICES: &str = r#"
SELECT id,clinic_id,name,description,price
FROM clinic_services
WHERE clinic_id = $1
ORDER BY name ASC;
"#;

pub const QUERY_INSERT_CLINIC: &str = r#"
INSERT INTO vet_clinics(name,address,phone,email,description,image,created_at)
VALUES($1,$2,$3,$4,$5,$6,$7);
"#;

pub const QUERY_INSERT_CLINIC_HOUR: &str = r#"
INSERT INTO clinic_hours(clinic_id,day,open_time,close_time) VALUES($1,$2,$3,$4);
"#;

pub const QUERY_INSERT_CLINIC_SERVICE: &str = r#"
INSERT INTO clinic_services(clinic_id,name,description,price) VALUES($1,$2,$3,$4);
"#;

pub const QUERY_DELETE_CLINIC_HOURS: &str = r#"DELETE FROM clinic_hours WHERE clinic_id=$1;"#;

pub const QUERY_DELETE_CLINIC_SERVICES: &str =
    r#"DELETE FROM clinic_services WHERE clinic_id=$1;"#;

pub const QUERY_DELETE_CLINIC: &str = r#"DELETE FROM vet_clinics WHERE id=$1;"#;

pub const QUERY_CLINIC_HAS_APPOINTMENTS: &str = r#"
SELECT EXISTS(SELECT 1 FROM vet_appointments WHERE clinic_id=$1);
"#;

// clinic services (standalone resource)

pub const QUERY_LIST_SERVICES: &str = r#"
SELECT
    cs.id,cs.clinic_id,cs.name,cs.description,cs.price,
    vc.name AS clinic_name
FROM clinic_services AS cs
INNER JOIN vet_clinics AS vc ON (cs.clinic_id = vc.id)
ORDER BY cs.name;
"#;

pub const QUERY_GET_SERVICE: &str = r#"
SELECT
    cs.id,cs.clinic_id,cs.name,cs.description,cs.price,
    vc.name AS clinic_name
FROM clinic_services AS cs
INNER JOIN vet_clinics AS vc ON (cs.clinic_id = vc.id)
WHERE cs.id = $1;
"#;

pub const QUERY_GET_SERVICE_CLINIC: &str = r#"
SELECT clinic_id FROM clinic_services WHERE id=$1;
"#;

pub const QUERY_SERVICE_NAME_TAKEN: &str = r#"
SELECT EXISTS(
    SELECT 1 FROM clinic_services
    WHERE clinic_id = $1 AND name = $2 AND ($3 IS NULL OR id != $3)
);
"#;

pub const QUERY_SERVICE_IN_USE: &str = r#"
SELECT EXISTS(SELECT 1 FROM vet_appointment_services WHERE service_id=$1);
"#;

pub const QUERY_SERVICE_BELONGS_TO_CLINIC: &str = r#"
SELECT EXISTS(SELECT 1 FROM clinic_services WHERE id=$1 AND clinic_id=$2);
"#;

pub const QUERY_DELETE_SERVICE: &str = r#"DELETE FROM clinic_services WHERE id=$1;"#;

// vet appointments

pub const QUERY_LIST_APPOINTMENTS: &str = r#"
SELECT
    va.id,va.pet_id,va.clinic_id,va.appointment_date,va.appointment_time,
    va.reason,va.status,va.notes,va.created_at,
    p.name AS pet_name,vc.name AS clinic_name,u.name AS owner_name
FROM vet_appointments AS va
INNER JOIN pets AS p ON (va.pet_id = p.id)
INNER JOIN vet_clinics AS vc ON (va.clinic_id = vc.id)
LEFT JOIN users AS u ON (p.owner_id = u.id)
ORDER BY va.appointment_date DESC, va.appointment_time ASC;
"#;

pub const QUERY_GET_APPOINTMENT: &str = r#"
SELECT
    va.id,va.pet_id,va.clinic_id,va.appointment_date,va.appointment_time,
    va.reason,va.status,va.notes,va.created_at,
    p.name AS pet_name,vc.name AS clinic_name,
    vc.address AS clinic_address,u.name AS owner_name
FROM vet_appointments AS va
INNER JOIN pets AS p ON (va.pet_id = p.id)
INNER JOIN vet_clinics AS vc ON (va.clinic_id = vc.id)
LEFT JOIN users AS u ON (p.owner_id = u.id)
WHERE va.id = $1;
"#;

pub const QUERY_LIST_PET_APPOINTMENTS: &str = r#"
SELECT
    va.id,va.pet_id,va.clinic_id,va.appointment_date,va.appointment_time,
    va.reason,va.status,va.notes,va.created_at,
    vc.name AS clinic_name,vc.address AS clinic_address
FROM vet_appointments AS va
INNER JOIN vet_clinics AS vc ON (va.clinic_id = vc.id)
WHERE va.pet_id = $1
ORDER BY va.appointment_date DESC, va.appointment_time ASC;
"#;

pub const QUERY_LIST_CLINIC_APPOINTMENTS: &str = r#"
SELECT
    va.id,va.pet_id,va.clinic_id,va.appointment_date,va.appointment_time,
    va.reason,va.status,va.notes,va.created_at,
    p.name AS pet_name,u.name AS owner_name
FROM vet_appointments AS va
INNER JOIN pets AS p ON (va.pet_id = p.id)
LEFT JOIN users AS u ON (p.owner_id = u.id)
WHERE va.clinic_id = $1
ORDER BY va.appointment_date DESC, va.appointment_time ASC;
"#;

pub const QUERY_LIST_USER_APPOINTMENTS: &str = r#"
SELECT
    va.id,va.pet_id,va.clinic_id,va.appointment_date,va.appointment_time,
    va.reason,va.status,va.notes,va.created_at,
    p.name AS pet_name,vc.name AS clinic_name
FROM vet_appointments AS va
INNER JOIN pets AS p ON (va.pet_id = p.id)
INNER JOIN vet_clinics AS vc ON (va.clinic_id = vc.id)
WHERE p.owner_id = $1
ORDER BY va.appointment_date DESC, va.appointment_time ASC;
"#;

pub const QUERY_GET_APPOINTMENT_ROW: &str = r#"
SELECT
    id,pet_id,clinic_id,appointment_date,appointment_time,
    reason,status,notes,created_at
FROM vet_appointments
WHERE id = $1;
"#;

pub const QUERY_GET_APPOINTMENT_SERVICES: &str = r#"
SELECT vas.service_id,cs.name,cs.price
FROM vet_appointment_services AS vas
INNER JOIN clinic_services AS cs ON (vas.service_id = cs.id)
WHERE vas.appointment_id = $1;
"#;

pub const QUERY_APPOINTMENT_EXISTS: &str = r#"
SELECT EXISTS(SELECT 1 FROM vet_appointments WHERE id=$1);
"#;

pub const QUERY_INSERT_APPOINTMENT: &str = r#"
INSERT INTO vet_appointments(
    pet_id,clinic_id,appointment_date,appointment_time,reason,status,created_at
) VALUES($1,$2,$3,$4,$5,'scheduled',$6);
"#;

pub const QUERY_INSERT_APPOINTMENT_SERVICE: &str = r#"
INSERT INTO vet_appointment_services(appointment_id,service_id) VALUES($1,$2);
"#;

pub const QUERY_UPDATE_APPOINTMENT: &str = r#"
UPDATE vet_appointments SET
    pet_id = $2,
    clinic_id = $3,
    appointment_date = $4,
    appointment_time = $5,
    reason = $6,
    status = $7,
    notes = $8
WHERE id = $1;
"#;

pub const QUERY_DELETE_APPOINTMENT_SERVICES: &str = r#"
DELETE FROM vet_appointment_services WHERE appointment_id=$1;
"#;

pub const QUERY_DELETE_APPOINTMENT: &str = r#"DELETE FROM vet_appointments WHERE id=$1;"#;

// pricing plans & orders

pub const QUERY_LIST_PLANS: &str = r#"
SELECT id,name,price,description,features,created_at
FROM pricing_plans
ORDER BY price ASC;
"#;

pub const QUERY_PLAN_EXISTS: &str = r#"SELECT EXISTS(SELECT 1 FROM pricing_plans WHERE id=$1);"#;

pub const QUERY_LIST_PLAN_ORDERS: &str = r#"
SELECT
    o.id,o.user_id,o.plan_id,o.order_date,o.status,
    u.name AS user_name,p.name AS plan_name,p.price
FROM pricing_plan_orders AS o
LEFT JOIN users AS u ON (o.user_id = u.id)
LEFT JOIN pricing_plans AS p ON (o.plan_id = p.id)
ORDER BY o.order_date DESC;
"#;

pub const QUERY_INSERT_PLAN_ORDER: &str = r#"
INSERT INTO pricing_plan_orders(user_id,plan_id,order_date,status)
VALUES($1,$2,$3,'pending');
"#;

pub const QUERY_PLAN_ORDER_EXISTS: &str = r#"
SELECT EXISTS(SELECT 1 FROM pricing_plan_orders WHERE id=$1);
"#;

pub const QUERY_SET_PLAN_ORDER_STATUS: &str = r#"
UPDATE pricing_plan_orders SET status=$2 WHERE id=$1;
"#;
