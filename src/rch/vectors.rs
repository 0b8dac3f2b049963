// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustchkhash
// File: vectors.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2023 Volker Schwaberow

//! Known-answer vector corpus, grouped per algorithm into a
//! short-message and a long-message set. Pairs follow the layout of
//! the NIST ShortMsg/LongMsg response files: message and expected
//! digest as hex strings, message possibly empty, digest exactly two
//! characters per digest byte.

use crate::rch::engine::HashAlgorithm;

#[derive(Debug, Clone, Copy)]
pub struct TestVector {
	pub msg: &'static str,
	pub digest: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct VectorSet {
	pub name: &'static str,
	pub vectors: &'static [TestVector],
}

pub static SHA1_SHORT_SET: VectorSet = VectorSet {
	name: "short message",
	vectors: SHA1_SHORT_MSG,
};

pub static SHA1_LONG_SET: VectorSet = VectorSet {
	name: "long message",
	vectors: SHA1_LONG_MSG,
};

pub static SHA256_SHORT_SET: VectorSet = VectorSet {
	name: "short message",
	vectors: SHA256_SHORT_MSG,
};

pub static SHA256_LONG_SET: VectorSet = VectorSet {
	name: "long message",
	vectors: SHA256_LONG_MSG,
};

pub static SHA512_SHORT_SET: VectorSet = VectorSet {
	name: "short message",
	vectors: SHA512_SHORT_MSG,
};

pub static SHA512_LONG_SET: VectorSet = VectorSet {
	name: "long message",
	vectors: SHA512_LONG_MSG,
};

/// Test suite selector: the two vector sets for an algorithm, short
/// messages first for deterministic reporting order.
pub fn suite_for(
	algorithm: HashAlgorithm,
) -> [&'static VectorSet; 2] {
	match algorithm {
		HashAlgorithm::Sha1 => {
			[&SHA1_SHORT_SET, &SHA1_LONG_SET]
		}
		HashAlgorithm::Sha256 => {
			[&SHA256_SHORT_SET, &SHA256_LONG_SET]
		}
		HashAlgorithm::Sha512 => {
			[&SHA512_SHORT_SET, &SHA512_LONG_SET]
		}
	}
}

pub const SHA1_SHORT_MSG: &[TestVector] = &[
	TestVector {
		msg: "",
		digest: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
	},
	TestVector {
		msg: "00",
		digest: "5ba93c9db0cff93f52b521d7420e43f6eda2784f",
	},
	TestVector {
		msg: "616263",
		digest: "a9993e364706816aba3e25717850c26c9cd0d89d",
	},
	TestVector {
		msg: "c60e99b040",
		digest: "b279cef32398bf02df1c0fd73cb306674a2fc10d",
	},
	TestVector {
		msg: "399958987d1463",
		digest: "4031c7163b31ef3c661e31854732921b7a0c62c5",
	},
	TestVector {
		msg: "434fdcba41c3cdf36f67be7947",
		digest: "d34074ccd3fae5d2ca3df8d47830ab2ead028b7e",
	},
	TestVector {
		msg: "5da606a980dc5940871593d970941ea220aea9cbb0de34190da55b7fdf603d",
		digest: "9413c6c66a5cadfb9ee50dbf4f2063507d7d83ce",
	},
	TestVector {
		msg: "912d790d0205ae6f8fd6190579922ae60f6bb2d3dc969d583b5bced12fe83f2a7f0983dcc8ff8fa3704067e7cb6dd3",
		digest: "3c8fa815959020919110d47b186857c3f46619f7",
	},
	TestVector {
		msg: "27bd63f5bf886246a2cdb3742ccbce9ceec09c0a11123dddbb22df862e2b2a8f257bacaeb53dad633796b4bed5f199f542c8792e3b3cb3d73adb42503ed01f1e",
		digest: "a208aabbd0dccc6b1c15836aa28cd0bc9b11d7e8",
	},
	TestVector {
		msg: "6162636462636465636465666465666765666768666768696768696a68696a6b696a6b6c6a6b6c6d6b6c6d6e6c6d6e6f6d6e6f706e6f7071",
		digest: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
	},
	TestVector {
		msg: "61626364656667686263646566676869636465666768696a6465666768696a6b65666768696a6b6c666768696a6b6c6d6768696a6b6c6d6e68696a6b6c6d6e6f696a6b6c6d6e6f706a6b6c6d6e6f70716b6c6d6e6f7071726c6d6e6f707172736d6e6f70717273746e6f707172737475",
		digest: "a49b2446a02c645bf419f995b67091253a04a259",
	},
];

pub const SHA1_LONG_MSG: &[TestVector] = &[
	TestVector {
		msg: "8c2b4607126f7ebee0ce76ee31f7db802a92984af8e7d0b9d58e729050ba130a398393f16c9b8e60ea4bfd63b5e0d33c07bf5e7d8fffcd297c5ec62c18a660b6806f9068120c166232dbc4eb0d3418e926b593",
		digest: "08043714ab0f9c1980f9e57d6bc4cec1ee6a9cc7",
	},
	TestVector {
		msg: "09e4132657140a0935bd0530334b6bacaf661465a330ab240a7751c623348805da7fdfcfb7f13f890c736b7d92274885815a715e096c3fc0c2f4defce40fe031e01f30beef2ec59e126a99e3aaff2758eb012e35ecc5bb84aa9d944f86ef998979ce6f25e00417f2c215e894713400bd60dd4edc1f0541b6d7bd7cfe952ac0bd4c432b",
		digest: "a64fe9510661844d60412a0155b667bed9b78bde",
	},
	TestVector {
		msg: "788917a52900cd0cadc59ac14664299f96170849bf198109620099a6faef79aff23d1d21a2399cbd86cb5f0f834cfd26212b887284dc797fd23502e7db276e82391655360433cb67439788f891768190d12109ba2c8686ee6ce87994eda08d6a24f86d042a045148fca262b730368ba442535968ff5e84717f3a16fe346dfdca022d695a37baf60aa94f2e694838181113e0240b0ccb061f8f0ef7e1c756e7bec46e20",
		digest: "9b7d860fdeaac9129bafa15b426b4185567c023f",
	},
	TestVector {
		msg: "44f8034078128a9960ca5f4a0ea8afac3116b6c0ad838a9f3409fef3ecda9ff480a0ab88b48d8d3b4fac2656be6c82d3ac613296d290d9c792d1ad92ec76bc0f16ee50b48553f9f57d73507af474e1713b64ad3c5bf31955f39b8a9a0332b1aa4f28fae5066b3dde1133569a4d89bc43a9e12ed5fb64fc3f34dc5bb17de19e28493ff97d8431ff197121062bca6e9060af8e1b78a587936a6362cb0970a1c070c38d88b9d45c5cf11410fb0fa336b9159aab11bcf61823ae5e551750a2f4bea50989cede5854ccf5f1c67a05e9b3bc540552af3964b902fe6c943b90e87c3c5a0e6234f65159842dec5fe6acdc48088b9b574760fa584fdcd8386a6975d737a8",
		digest: "f8cbd7a25eda0c3a14c7a39b5078d44011770b67",
	},
	TestVector {
		msg: "e457fc5977022057d8f0a3ac4e347685c3115d88c0e3dcf47cd33a138dad4710ee4c3a5f54cb9841a22bfab276dc60eb032bd556e12797d91115e597163770a0494facd253bfa068ea09c4022975d9465abde30c9ea71c6eaea630b33d045f61b31bcd8ea369e84ec0b4491089faca3058deb325432ba563fc0ff3a5cf8cce9aba824342fc9c35038d0f6adaf5cc6b8e4297d6ec3e03c7aa147cc74f23d5140575cfd8da96d9aac08352f03a9ae6562b85cba3313e717275f4d440dbe5a6c2f61a63dcd4ffdc26b4448239bf4a712cce0eee55eccc20f4ab6a85e1ddbb7b4f0ffe68b56af06afce2757b09ff4e863f0a3adfd352bd19cbb5c4930205e779ffd35a1d7f9cdd9673d605d8720817d144c56d7a903d2009eef3640cd380797da617764c0dab9bf8c167faf456ea78d8b7c2181dafc639c969fab7068298a802b4b2f651e906dc7e7be3bd80e288b7b2817c8f5018d21c0e00a2dc9b7efb5ec0acd63c4401a1a74816c5d816a65e464fcbc3ee069270df0d7102a1c3199dd034fbe7ac0c5bbcc9",
		digest: "c0a1979832b5bd762fd6826ac95196ec5f31f213",
	},
	TestVector {
		msg: "67fcbc3a15eb82cd88dac009ed25c04c8dade05302dfda56d679d9446efec1a58adcb6b6b32d2b13b5cc25d7fa2869dd99fe7abe4aa7cf70a75e46a20a0f3a598aedaac3cc323640454646293dcbc52486e736c554a188983d97734d92f79a7b8f31be0ebcda70b3b6f04797a830b636ae5f9bc643cfd6031db844ed5d50d229f2a119e5ed80439083f876bccc4b0d3b9dfc59217581017d68dcf10aee8e649001d5f116c307c0ce4799d97183c868cd0f149f0733bf8b2ccfe8e8192521cd26ed8b88687d6793f5c2bcad93ad6dbb880231caefcd6a42407323d30b0bd186d67ca55c7e2ea6454063672ffedf712a70e0970674e73608af80b646db5d760b4393356d5503fff09a75320cb26e907279ed8bf2fb3081247b2717a73011b88a5a8576dda21b13666d62cf28db1607c626e0f1a7694b9cda60e9621cc19ac5632d944ec9a5da904c6ed7aa834b32d2c32b4adb7d2ea190354e24f3dc61c1b158fde1c02d614ae7faa063c52348c28e27339269c6e02c895ba15d3568a99d7d2b2d321d70efffca0f9f951b2cfc71649b9d1b8e5aabb3cc1e2f3051cf2d0b7dcf1fde267093346adf84af9d497066afd637db2f746c470908ce91945f3dbb2a3bdb142f7fa2524dc628c5c0d11b259b21a2e75b3f7d8f8bad78f766adcc571d6162b3137577e05456a1a49e36a7c709292a89ad353a3ec1d7de1b373c1b27d5aadd3fb8bf251c",
		digest: "9c999f77dc3cd2d9a50e7f28cfd6264d3c8812dd",
	},
	TestVector {
		msg: "be3a46349715851513f3ff5cb6e5c4171b29d5c75f310af83b816a0af2f73df856d3a74b6f4e2f72af23e02469bc43737001cc1d84a5596ecfa5ace1bc322f6704577b9c0191a0a4bf2600cbf317f23a957b6d1c86e7ed00609b6af817cce79172810ff0c19e60f984bbbd4c16710697f0ff7dedbbf9e686cba2cde6519d6248252bfa7bf9e68a06f9229aec5debf2e96df1f328b6ab7bb72aa53dbd685885c0fca4cddc8e98296ff23cfee3fed7e5d33bf4352deac098474e1832d827440885da0a4c6616e1eb6b6de697ca2f0fbe3e968aabc082d49be6019b648b7ada6e4a3a94183436d1c2656458cdf27e9cfd2627a2bd82b1a783a85e45c41d5174257833d82140689792cde525cb950ddf686620c3fa85d4ad38c9e40130e65e34c5ada2831a235730d46c02ac8bdf1d782ac1293f1a1aaa4eda796049227d8cfaf8a7231684c5f3e1145a8000d059bdcc4b988beaa43cdbc45eac585e410ff40d0a1daa274928c5be5f5e929e0ff4755edf731b82c008696aa4868bea903686736fcd0995b2e228541061dd5c2d2e36f21f3ca71b9b36f39b9a47c129cae03414c71bed85e1522477bd2de69fe4b4c4fdfe06dbef711e2f5aa9d1909e127fbf9371b5a51d9de8d8c4e4f2628ae3139f758090c3b49a5eac5ac85ec3f42688b67bb42fbc302f5a18557fc4e9b3d5278dda933bd9cad1f3bd3a1beabab993c2bdab27f9afb09bae576197a9460b9e34d3e12d6c76ed81bd52b67b687c3048ad88e93cb314ed2f23c674c43dfa7df9cef690f2145fa915088003f149c3f7873a150efcb07f13476148d80a846aa8b96912fa4af4b53ae137ca49c3b06c5cb0b91f511bbfeba36025428b0646eb6b2d75e25dde057a46a703abaa8e6595801d34177002a1",
		digest: "b8705467f8acb4800f3c22333b6b58340f7b481d",
	},
];

pub const SHA256_SHORT_MSG: &[TestVector] = &[
	TestVector {
		msg: "",
		digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
	},
	TestVector {
		msg: "00",
		digest: "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d",
	},
	TestVector {
		msg: "616263",
		digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
	},
	TestVector {
		msg: "0f86f818da",
		digest: "edc66d2577e057208825b4c9271695c39014ce4820fc39ce6e6825d0aaadd54b",
	},
	TestVector {
		msg: "672f768161ed4e",
		digest: "e5f432da66597bcc4eb9a7cf3bdbcb4fefa5ca872f5ff8d4aebdb9029b57d6c6",
	},
	TestVector {
		msg: "1dc0fe761ab51e5a5c3337e695",
		digest: "3858ca3036d6e8f864017d7d67d7a2ae96344cd65577ee8eb32e7dc49572a5bb",
	},
	TestVector {
		msg: "e4df478e36ae358b6bf75368bd99b0fc0fad0b8cb32ad56c924f99b7077727",
		digest: "34ec8ba59fed5f87cd97942f9efaeffef9b89d2c78a7f5271373bcb4e7b9e291",
	},
	TestVector {
		msg: "4c7865c23aaf0377a792bf3399aade6768199f378bc2b363f25fa8225b37cf85f5ea15417a827ba05a77036cdb121d",
		digest: "6810d103b2b5e708847ef62f599ba38b52cb01c45ac38d45d6c962b8a43a7144",
	},
	TestVector {
		msg: "c557280c093608c693581e0c921e7c0ba1887b6a80a96182382b23aed112f0d7a083db9dd57cebe492980fdfb950d3955dfcaac730c6f231349d973c3bcda30e",
		digest: "5a7b4df50cbe03052de29b6f9a5ed7c0c10a9f30478ced64e3829b5d3ec004c6",
	},
	TestVector {
		msg: "6162636462636465636465666465666765666768666768696768696a68696a6b696a6b6c6a6b6c6d6b6c6d6e6c6d6e6f6d6e6f706e6f7071",
		digest: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
	},
	TestVector {
		msg: "61626364656667686263646566676869636465666768696a6465666768696a6b65666768696a6b6c666768696a6b6c6d6768696a6b6c6d6e68696a6b6c6d6e6f696a6b6c6d6e6f706a6b6c6d6e6f70716b6c6d6e6f7071726c6d6e6f707172736d6e6f70717273746e6f707172737475",
		digest: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
	},
];

pub const SHA256_LONG_MSG: &[TestVector] = &[
	TestVector {
		msg: "8c1e5995a79173fe790778921286fcaebbb455cdbefcddd77fe267a8b3623767dfc8e2db343aad2e5ee6b0aa144e5cdbf219b07bc227b8949f163e73024fdd9b83697d32c7f35d2d32969341f63170598cb253",
		digest: "e873d04e842c926dd88999ebe02f6e35c536701e4f168652a56685be6b770840",
	},
	TestVector {
		msg: "5aa894e0b8be6ffee666e4bb1bcf5dbed8bdd021fa06b235657e865cf0e39b88d8b0cf5c042e7619ab24de43899269e56ed4e82c8536418a72e64829e80d0f8aa3e6e2a761462b197322a23dc4a86f1cacfc22d1735d5003e6c523ded8f7333e6380114c9db2e0e67f42b399f7e0582ac09ba2b9757fd3b70405c17ac53b7b3c203042",
		digest: "5f6536d980b721a7cf3e0ca6b004f9f131d54b48688da1b125de4a621445bf30",
	},
	TestVector {
		msg: "e6c007cb10adb5ccd725a47406a47594ab484c7617b4c29673c8551b0983386fe31c53ab8d9fcdb9076163bf6fdcd43203f4e76ba4ce1d0d6d198a47ea1bb38743177f2e15a37678ab15d5ec675e0555e4115140f86b4d144a33812b1118360099d3a0005eb44f7a10f31313deeadca758e3ce11c688f72bd97f62d71248c2f02533c3f66f80ea26363529c75e723aa99c8386b9bbb8945e555d82b620f40963a2f94d",
		digest: "a0ba1b245900a7ca1a7db501c5442a1c29209238434a0664fee6abe5d8ba28e9",
	},
	TestVector {
		msg: "a9c225f7fd864957c746144eb0022815b4e37807ac02cdf20461b4769696dd4329f382d0f4d2e798adef06b359678a45b0fdaeb3a1177ee8497a431da6b72c174c3ce98403bc20166f9e30ac86e9f2b43e476f48c2e517e5c96c990efb795448a41c6ecc965c0c1cb2836216418cf3d2fd64bf37f7271c095f142a8c97094ff4d9143d949d8c3eca96dfdae7e48b3f829da83d23ef146e8782e1c6c106779cc1d62ed534d1d0059b47ecc8e07ee121b4e08942fb87f3ec836c785ab414af3564b56af9e00676f5620774c0c7883feaa80e5f0d4914bc92a9d9e13fc6f5cdfd59fbb0b29e464a404c1881568f6386e121fe86d3c16f33529026c9e10b6e58425f",
		digest: "23895aa00793aa93fe160af7e4bedbabc11e33bb416d3f9bfda30ad83e17b6bd",
	},
	TestVector {
		msg: "5ced24ed42bbf868f576864903d29dce00f72de12a355c2ba6e3e0671c7ffe25e84f964cd55f7d749d9e5c348cd49cacd9a95ef4cb43cd45a9845ceb35bc86b98041f56a1662c6b90fd45c846116eb1262f8fa1ab65a5647902831928ec56afed47e6f914e1abd06a5a24d567b0d13c4cf9991060c67df4f3a04d637c3376f78070ca799398d0d7a5329da4d687efb151cf10001a40a254e7d34c38cc3dabe4349bc5a7a44c12bf0e29d3ff181efccab4f6b7aa36c8add315b0efbc5f8c4f26bf4d16cba571bc4a6ec38c090a1736e457f7e847ddeb7604d7d06c40e578f685e6d2217e55078429d541dc679c5e4b3effece4f1b757f5b8000bd43b567b39b9d974a866122d24d767fcba325ef37e0b3ed14975e024ddd00260e2d6c1ee177681d9996dd255178678c3acb7e9e7c076c82117d3b95ab7799eecc8c0d2850cd436421fa4b752d63ec7f63c1c036e736d27e1c9145034e6d5d59cceaee555bdaa4dd352e7a9a24e39b7f771956633a2512e3d86ceb0f464af9280587e2399d0d10b19370e6b2",
		digest: "4e140ed7fe6a6736cb36fe9d494593b5e1be333459b7f9db313391e4bceb08f7",
	},
	TestVector {
		msg: "6c2038cf39d1295ef1df44751b2966c483eee4c470dcaa7b17562883d63d245aaef2b5576361cd2d1e71f02a30d290fb728882f5b966240a405b83218eaf822d7ca22b7d0c943af2e41527b2dd05d69fa726bc37f2f7243265b5e775ae4686d8ed5a8cae74158c19865ff6e879ea2b3e0bcc16901b658a223497af6769e6d83232517e5c99d1026fd1ccd70f39b8c8f8ef7e006aa21a52e00997b6f551c65497f3e3657f2cfbf48d6b763d4335df7c656f886f15112a194969cf3051a89d09e189cbab15c7ce2995d093548e83efd3b1335ab5ee9de390a6aa6982477e9e57316eeaf018e76f20cb6aa9f61c33a9155545e8f63f9fa47fec0a72834f0dca19d2f6b13705eab7d6b2b647ed49259a03ee56d46bcce70e47aafe29efecf8335b1a5d60cd394b08710f1e5dc1f7cd3d40f6a05d45d07b44838f58e06aa59bed3718af114e2b6739d14cbdfbf01994dfeeada146a081e861260a5e80f143c22cdee73da5cc98fadf3e0b8695e0cefc6341024267b079f79bc24dc39cfc4316a76a3fd16812d1ee1f69375d8811ed8e75f678abe7a34f7c910688eadaaf8b8164d912083e157eade7aaa367d1869c1ea2aa3441816c720c74efa8a13cd835ab08ff47a912214f821dbb30f8fcfea233c30a755b31493212d16ce579c483bf56ba98d1936e4fa24d3bf82b85d68efcd073a377c011d50320cb132f5b76a019fdde49355718872a0d",
		digest: "832a205a7d12e10a8ac3efd9557394de27e2010e16b204fa2da9930ece3fb93a",
	},
	TestVector {
		msg: "f9a30c06700275f02134a9d2563cb1f2751776ca46e03721ddeb561d1b9f9f81f7bb1088d5f50cdc1ddb18023f68142cd8db24b2e15832acfac4f3dd878abfbf17b1c40c5dfd0ac55ef0d5b917185d2294dd30b91b77bd61ad43a29fd21fcd4cd4d32ae5a37a107050b7a24a059754a7c940f56ddda60f3e4b72a49f003e048059686fa20f923a0007dab615adbe012b29f541bf35aca103e5c8c01b03108f49a86a00568f1fd8ac2b35149d93e00de2e7e87b1a6384701e4ef7597b19b9d868f1069e927c863458c898a626f494f09a8f1cd79ec1919a2114cbc2ebe3969a64afa7294978443e76c9db9fc05b8bf5bb91682109d19c509fcaf303a784248f219eb4b62340fc4ca4fe5b37221422d734150d4e319a5332f5ec083a6dc60bd4c98ff2525cbf2ffb0e175500c11e3efe25c9041ce68fb496999e6f4faa92e0f76d8c8644c26a82f1eefe8707c625033a8d50086297fd917202b0584438f6ecd9924187e755b0c38939cfcfde78380c4ed2a77ea47a31598550bbd6aa86b594f2046f46dc045931dd5f6a7ef78b6242a4c7020f7dc96a6e17a235c2935ce7423b6833b0accbe7f156c2c7d4110eed35acf644940be7be66df9a0189c89266a7551112806337ae44fc1ee6db29f4c2fa4a95a17b7c713d6616ea993fbaf699accdb57ced9c44c25ed802372db3e96ee5b574b027431f81ed0d22e7eab61d92fc1cdc877d1dbda11e016557cf8b2ead4341a6a011751a5607986ef32ff6bbbeec07205fa18915c5b021efafcca49386dea36dc6389e6809d3a412afdbeff3793a3f31f4ee8d459fbc71323cfaa5cda4aeb3e24461848d3a408656fc09e09df19912fc01df386eb30852bfbb56592b9f13751e01a611bf8b867ba3fae9321ce6f06a1e",
		digest: "41c4c108cc25a78db395e850a0a3edb7608ff279d181ccc9ed5829d56ba1ba4d",
	},
];

pub const SHA512_SHORT_MSG: &[TestVector] = &[
	TestVector {
		msg: "",
		digest: "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
	},
	TestVector {
		msg: "00",
		digest: "b8244d028981d693af7b456af8efa4cad63d282e19ff14942c246e50d9351d22704a802a71c3580b6370de4ceb293c324a8423342557d4e5c38438f0e36910ee",
	},
	TestVector {
		msg: "616263",
		digest: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
	},
	TestVector {
		msg: "b78ef50294",
		digest: "96077a08b4628c8c3ee588145517a678f2d4e75503947609b2bf98b3f03bdf77f4816182699a637a0a96765f0f6d8001057d2a3cd8f4daa652c449a8a6347770",
	},
	TestVector {
		msg: "c48f0886a25073",
		digest: "b5df85be1ab5d5be4ea9c702c664e5708e5b4a4b6ed13bf8547dacb212d011e0b44caf9965b859b4a03f49b617eb3c312152674686e7f53a8d834d73873287a0",
	},
	TestVector {
		msg: "c4f63060fead3665c593601dd9",
		digest: "4ba98db424791f353634f606ee6e9e78b59c68387d377c40c17c1dd0bc8a2a1a9a8d969223e38967cba627bd761784b1a99dfee8a0eb53cac0bb6c2f0fa2f577",
	},
	TestVector {
		msg: "9992a342dfff56863ac38b7707993b1cbf90d68505055dd213f4852ab219e7",
		digest: "fb5d94ac24cc4ad581d711f00baf9ae50403bf45691a73c176dfc58da96ed56c81221502c4a01e11bff3388c100874a1d5e80abc059878544da130be8bcf1fe0",
	},
	TestVector {
		msg: "4de21030f45504498de5ba819e00742aaf574c0e2670989d5e8e1e16ae382e1a0a20093e340e929999da40b17a8022",
		digest: "829022a1b7974e3530eff0664f2615f8a6c5667a22dd4e4ebf53c1d1c10ae2f79d5ecc42a3af1109470ed851ea338d8090140e6115d4277bffa479f3c655b2ee",
	},
	TestVector {
		msg: "545fcc50fbeee46a3803938d742f0eac6e1dbb896363a2f8133299364b964adda8d3054b45aee3f0de71ee818a216a4f9a457702fb7cb14c8dab1836153aa0af",
		digest: "52728ef29c77558e0f306a06dc1ba6e18847ebeafb36daf1d8d582d87dfc1cb0d3c9cb0e37c957245f1dd153cae0cb71dd3131fac927330d87a1599c48fa7010",
	},
	TestVector {
		msg: "6162636462636465636465666465666765666768666768696768696a68696a6b696a6b6c6a6b6c6d6b6c6d6e6c6d6e6f6d6e6f706e6f7071",
		digest: "204a8fc6dda82f0a0ced7beb8e08a41657c16ef468b228a8279be331a703c33596fd15c13b1b07f9aa1d3bea57789ca031ad85c7a71dd70354ec631238ca3445",
	},
	TestVector {
		msg: "61626364656667686263646566676869636465666768696a6465666768696a6b65666768696a6b6c666768696a6b6c6d6768696a6b6c6d6e68696a6b6c6d6e6f696a6b6c6d6e6f706a6b6c6d6e6f70716b6c6d6e6f7071726c6d6e6f707172736d6e6f70717273746e6f707172737475",
		digest: "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
	},
];

pub const SHA512_LONG_MSG: &[TestVector] = &[
	TestVector {
		msg: "1f8761740c6ba3bcc6f23eae04b25fc0afaec40d03fbafe1ce476eecdd91c1abd2c171aa0a4e7e77a2eecc78a9a2c64d49b15192b65253f0decf331d290be34b5094f047d1778418714a3ed96b58c46aabb28a",
		digest: "53d91547c84a29c44aba3e0f75738e649b8cc99e5cd6437328a952a20bb2c820a46f26d69fe2521ac62052f524a1f8379f2f70879fcebbb2569086d0560aeca0",
	},
	TestVector {
		msg: "aaa8367d418c2790146bc484bf063be74e8a22a61a0f20158c0016878011455c9649daea846ebcfe34224cf9a40eb2ef74a63356ef1b3bfcc6046128a44d6a1df6461de182d93d4a25c23d8c6aa87bf0742107dfec23cf2d114c6f279c99da5516a23d7b785ff1634f273d81580a364c6b1a322fadb15722aaef652d90956337529a38",
		digest: "4f098d5361c8315d4fa1532c1de761525e3fdfd98d1ca3e604bd7dac7effac0551e5d719fcd4cad9d5e38df32d437475e54419cb267d932d9119522331b7cf23",
	},
	TestVector {
		msg: "85695c30f4e4a54aa87169419e20d5d055a86819017dcee8b16bdbf01a803b674bd7d6250426132ed6cc1a65e7dfde2ca0ce96c2e27b7751edca91148f4eb19ac2c43819ed4bdd1877f424df240854b63771aa842b02099e4a5297b7abfc1be509b5d68cd3745fddf790231877c466ed05e60ffd81f06ad9f09482de641062f867e6a59e32fff10c63ded38ea25865fa1edd1934ccd82b31418c1bd9fb00f30256ed5e",
		digest: "e1fd0b318b2f3f2291195080d0fec4334d291feabca02235fa4bb7f20c6eac528784d586408a2e27bbb8c019cd4161c04e8016121889b7d7207db2c549f189d0",
	},
	TestVector {
		msg: "32de2c9fff2b8b4fb50685380c56a243a2386e7a6cde3af798ab19c842872432eada2e1885654790fe648c0f9d2a82fbf1e0c8d7c0fc2b55eb8439ac3f5021250d0ae1e9565162e319e6b99976f136a9b1a32d284c2a2546ce1e133cfd2ce3a59b32002b35e04b30ba6506477fe44b8f0c6d723f7eb9a112e87898e2e753149e6cd4fb75c6e7b1842dfed2c44429edb3df685f65dd5a92cd1ff36f92d77a5315e30b24eb2b2c71c8b3e8e0177aff18c525e8389ddb24136362bc241111fcffa09c6670fc015fd3582df1c0d49743430e9229e828efa1b343d8c2f65668e69ab55604b20cd148b6d2f7c89a2eb16bbd3a307574a1c84d65c9446e9a75e04dc977",
		digest: "29863040f6dfad76af2732dbb7780db4070accc39ac1808b02d571253da8274166a09ec1fd5e52e31cdc918abf7a1f963ff2f79129a0f2d1d551c4ce932453f5",
	},
	TestVector {
		msg: "03d8c35afc2cf6b6db1c35b90eabfc64d842bf9fd42ae79f33f85ffb98e064e03ae6028cc7f77d1123121aca3ea3db9f99a44b2e3ce02821aac7b4fbb4c1688024552d03314da509d1a6f0033650b264a37395a35b56cb038ee51c453ca7e21c62a1a22b15d0746df43919c5353ce8e60496651c97266af029084105ce716da5b3c6ba5436a540e5b784ff4e727422296e9e0be56292daeaffda1c88aadd3b8fdbb987b33c82474f5c10b0ae87752a7505b7729e002bab902bc90ce989524438a00961e3defb7d62cc5608dfba4ecf8e6889931bf3785374c56555d3e0537bd71f30f0fec05f3dd0469fbac59d06cf3aed0584e46f64532c49036425e66f5f6f6dc4e57618f6311984c4566fc44594c519ba211c04e4e5f8e43c1d65577a664d27a7b580856a3e442f35ee1d1a41ffc455aa035c369d7c099691fc134f9a824549d2272c0fef1a312bec57e4ab592f0fbf0c50072f40dfa0ddd35a8e6a9c289bd52fed3206dbd45d58686a564449cb64a2f829b6b00573aadf47e01884943ec4fef49c0ab2",
		digest: "4e0ed1a7ab47183c2874e905bff590a7df4dfd2a9569d66efe10f5266944a77ae0c74e8e34b0d9131850a05bcf6a9499e2cbf54a0ed1a67e632f1f6674a19872",
	},
	TestVector {
		msg: "b9ec247c238ccd959b5e158e6e7809e23e3568100817a176f31fa888d30ca2052a60e151b820b6d80707f13421a5f68bab3314d228e496fc0f2c8c773baeffc1181cdd53edf44c9e7c1516718d69997302c48c2461c4a40ae6ed41f421b14b50d539f390795c57f577e65bafb19533cb424061d6809b65b68be6e1dcbefd926471946d855e8393ba84b7361708ced7230272b63c6e61ba34d40155d87aa4088de748f73f4b740eec4be0fa18dce758521d929b46f4bae24e812f3a35b824c6a5ae8de891c076bbbec77c3890a3a131e528b63bace1d3455c2939e64f3f9301c85595a5eb61644459a6019497fa83144803010d9f41ee8bdb60386445217bbfa2bc459d1d14cbc9ee5649a7184e2168d048350c4b79e921679929ca285c9bd815721646b6afbc932b793e52c60f36c63db4df1cdc122ca249aa28c5f27da62b343b364a307e96e1ec8348f42a6d1c7892a3971d4e4387fbfdfcc3d7759951544f8d8330d08ae54b2d5b2a7431b8440eb002535cd3595f9b932e6ea4bb2685c321bd41dd904d3c28464f41a7fc2e047a28c0823f8acf6305d8461c2f3d04d40d67c067b51914e86c22de84587640b2e7b0af0278948cc46565867fcc30133cae8eb35d60498445b09a86872e0801ea5114b1e032b427741486fa0b0dbc21098742707b9f4717b461600b38bfd0d027eb29f7826cb650bf341c79bafc533ac840e13f06a83cfb",
		digest: "f9311d39b95baff1e104085e6bd1b4bf1e98b4cafc3a6235bca5d490468360d16fb586e14e17cd1ae3f634efbc58da9619d807fbe2ac5f43e2e89d06f55e87f1",
	},
	TestVector {
		msg: "b95f4670ffb0f0318b52e74f02f4a9782a0915f45bb8c6dbb52cd6ea96bb5e20a30da1288b6f3f1811f7a27af4e82e326f12148999fda33e6c6bc33e126a71ed675b493c668dd28c1a8f9f2193028e5f2c5caf67b5de4a28cbe43b0b2e9dfccdd2d219f39eea5e1fca74ac041a5eace86fdb62263a89e007d35837d5e7ea54dcfbaa334fd3af2caccab59d1358ae35ca99f532dffb4a4859d64f37289da1c9f0de2b29115138457a614b3ed2a922d967a1cc2e96ad17662167dbbe62b016c6ae901cdbd49700a46ec63004a60aaaf52364212a0de78fb0bf036cbc28c844e08484314f03bf48e5ac78568151d13431b39be5ff9828256b13a33c77796c2ac08b5e4a5238b6d9262e76d7c799f47d1c47d3df09250c9c8147253aaeabc6480f1611791db036b5cb76526c121cbb43b6b29e23ad4aa23ddcb1831394086a92fc605e298df88b302e17d72ba5e40ef4f1c06294fb570d6432be6701ec902cb6411bed795f6357cf516fc59b48a2e79f0d7fbb27965e63a88025c7ece168e0b47d9116e214fda167ffce80039e7b4c84f3b20a4f2361ac03fb5f310dc75fd41167ed92aff79974fbee73d768a53b66ceee30210d96db20b1ec157ec1936b86f1ba8eaa66f7e6b15fae503a593e0f97b45ffb3a4165d9f9deca14ad5a2eabc7fcd2522f7a8ee7848bdc627dc0b7eca9397a92a717af47ae15cefe4ade77137cb5dfd41d7175931af20698409b1b074c6e1ab47dc6929835614b36665bb46e170a1f239827301b1172be9257e4d6bba077004ccd1642352748106fc43da90175e8ce657017a1ae5da2af85a70e72c8a8ec7c5c2eb0c7e3edd8de107ceae64e52ac3cab6a6225d8e1dced44947974900eae0db1019e446fa1fa7a7055ed366ae3f891ec",
		digest: "71fcd325333965a5fbd2576f8bb7fc64f4a5f66d8b22674754abbc0c62f754271f8f2161f5adcd01ed092b280484db94fb231f53d782b2553a3b0a289be6ace1",
	},
];

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rch::codec::decode_hex;
	use strum::IntoEnumIterator;

	#[test]
	fn every_set_is_well_formed() {
		for algorithm in HashAlgorithm::iter() {
			for set in suite_for(algorithm) {
				assert!(!set.vectors.is_empty());
				for vector in set.vectors {
					assert_eq!(vector.msg.len() % 2, 0);
					assert_eq!(
						vector.digest.len(),
						2 * algorithm.digest_size()
					);
					decode_hex(vector.msg).unwrap();
					decode_hex(vector.digest).unwrap();
				}
			}
		}
	}

	#[test]
	fn short_sets_start_with_the_empty_message() {
		for algorithm in HashAlgorithm::iter() {
			let [short, _] = suite_for(algorithm);
			assert!(short.vectors[0].msg.is_empty());
		}
	}

	#[test]
	fn long_messages_exceed_64_bytes() {
		for algorithm in HashAlgorithm::iter() {
			let [_, long] = suite_for(algorithm);
			for vector in long.vectors {
				assert!(vector.msg.len() / 2 > 64);
			}
		}
	}
}
